use super::entity::{Decision, SwipeAction};
use crate::domain::shared::{errors::DomainError, ids::AccountId};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// Storage for swipe decisions, one per `(user, place)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Inserts or replaces the decision for its `(user_id, place_id)` pair in
    /// one atomic step.
    async fn upsert(&self, decision: &Decision) -> Result<(), DomainError>;
    async fn decisions_for_user(
        &self,
        user_id: AccountId,
    ) -> Result<HashMap<String, SwipeAction>, DomainError>;
    async fn liked_place_ids(&self, user_id: AccountId) -> Result<HashSet<String>, DomainError>;
    /// All decisions of a user, most recent first.
    async fn history_for_user(&self, user_id: AccountId) -> Result<Vec<Decision>, DomainError>;
}
