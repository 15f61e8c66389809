use crate::domain::{
    preference::{
        entity::{Decision, SwipeAction},
        repository::PreferenceRepository,
    },
    shared::{errors::DomainError, ids::AccountId},
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument};

type Ledger = HashMap<AccountId, HashMap<String, Decision>>;

/// Decisions kept in process memory, one per `(user, place)`.
#[derive(Default)]
pub struct InMemoryPreferenceRepository {
    decisions: Mutex<Ledger>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, DomainError> {
        self.decisions
            .lock()
            .map_err(|_| DomainError::InfrastructureError("preference ledger lock poisoned".into()))
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    #[instrument(skip(self, decision), fields(user_id = %decision.user_id, place_id = %decision.place_id))]
    async fn upsert(&self, decision: &Decision) -> Result<(), DomainError> {
        let replaced = self
            .lock()?
            .entry(decision.user_id)
            .or_default()
            .insert(decision.place_id.clone(), decision.clone());
        debug!(replaced = replaced.is_some(), "Decision stored");
        Ok(())
    }

    async fn decisions_for_user(
        &self,
        user_id: AccountId,
    ) -> Result<HashMap<String, SwipeAction>, DomainError> {
        Ok(self
            .lock()?
            .get(&user_id)
            .map(|by_place| {
                by_place
                    .iter()
                    .map(|(place_id, d)| (place_id.clone(), d.action))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn liked_place_ids(&self, user_id: AccountId) -> Result<HashSet<String>, DomainError> {
        Ok(self
            .lock()?
            .get(&user_id)
            .map(|by_place| {
                by_place
                    .values()
                    .filter(|d| d.action == SwipeAction::Like)
                    .map(|d| d.place_id.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn history_for_user(&self, user_id: AccountId) -> Result<Vec<Decision>, DomainError> {
        let mut history: Vec<Decision> = self
            .lock()?
            .get(&user_id)
            .map(|by_place| by_place.values().cloned().collect())
            .unwrap_or_default();
        history.sort_by(|a, b| {
            b.decided_at
                .cmp(&a.decided_at)
                .then_with(|| a.place_id.cmp(&b.place_id))
        });
        Ok(history)
    }
}
