use crate::domain::shared::{errors::DomainError, ids::AccountId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SwipeAction {
    Like,
    Skip,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwipeAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "skip" => Ok(Self::Skip),
            other => Err(DomainError::InvalidAction(other.to_string())),
        }
    }
}

/// A user's verdict on one place.
///
/// `(user_id, place_id)` is the natural key: recording again for the same pair
/// replaces `action` and `decided_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Decision {
    pub user_id: AccountId,
    pub place_id: String,
    pub action: SwipeAction,
    pub decided_at: DateTime<Utc>,
}
