use super::value_objects::Email;
use crate::domain::shared::ids::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A registered user as seen by the rest of the system.
///
/// The password hash never travels with this type; see [`StoredAccount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub city_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An account together with its password hash, as kept by the account store.
#[derive(Debug, Clone)]
pub struct StoredAccount {
    pub account: Account,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub id: AccountId,
    pub email: Email,
    pub password_hash: String,
    pub city_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    pub fn to_account(&self) -> Account {
        Account {
            id: self.id,
            email: self.email.as_str().to_string(),
            city_id: self.city_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            created_at: self.created_at,
        }
    }
}
