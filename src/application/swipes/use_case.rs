use super::dto::RecordSwipeRequest;
use crate::domain::{
    account::repository::AccountRepository,
    catalogue::store::Catalogue,
    preference::{
        entity::{Decision, SwipeAction},
        repository::PreferenceRepository,
    },
    shared::{errors::DomainError, ids::AccountId},
};
use chrono::Utc;
use std::sync::Arc;

pub struct SwipeUseCase {
    accounts: Arc<dyn AccountRepository>,
    preferences: Arc<dyn PreferenceRepository>,
    catalogue: Arc<Catalogue>,
}

impl SwipeUseCase {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        preferences: Arc<dyn PreferenceRepository>,
        catalogue: Arc<Catalogue>,
    ) -> Self {
        Self {
            accounts,
            preferences,
            catalogue,
        }
    }

    /// Records (or overwrites) the user's verdict on a catalogue place.
    pub async fn record_swipe(
        &self,
        user_id: AccountId,
        request: RecordSwipeRequest,
    ) -> Result<Decision, DomainError> {
        let place_id = request.place_id.trim();
        if place_id.is_empty() {
            return Err(DomainError::ValidationError("place_id is required".into()));
        }
        let action: SwipeAction = request.action.parse()?;
        if self.catalogue.place(place_id).is_none() {
            return Err(DomainError::UnknownPlace(place_id.to_string()));
        }
        if self.accounts.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::Unauthorized);
        }

        let decision = Decision {
            user_id,
            place_id: place_id.to_string(),
            action,
            decided_at: Utc::now(),
        };
        self.preferences.upsert(&decision).await?;
        tracing::info!(user_id = %user_id, place_id = %decision.place_id, action = %action, "Swipe recorded");
        Ok(decision)
    }

    pub async fn history(&self, user_id: AccountId) -> Result<Vec<Decision>, DomainError> {
        self.preferences.history_for_user(user_id).await
    }
}
