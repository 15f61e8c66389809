use super::dto::CityProgress;
use crate::domain::{
    catalogue::{
        entity::{City, Place},
        store::Catalogue,
    },
    preference::repository::PreferenceRepository,
    recommendation::filter,
    shared::{errors::DomainError, ids::AccountId},
};
use std::sync::Arc;

pub struct RecommendationUseCase {
    preferences: Arc<dyn PreferenceRepository>,
    catalogue: Arc<Catalogue>,
}

impl RecommendationUseCase {
    pub fn new(preferences: Arc<dyn PreferenceRepository>, catalogue: Arc<Catalogue>) -> Self {
        Self {
            preferences,
            catalogue,
        }
    }

    pub fn list_cities(&self) -> Vec<City> {
        self.catalogue.cities().to_vec()
    }

    /// Places of `city_id` the user has not swiped yet, in catalogue order.
    ///
    /// Guests (`None`) see the whole city; an unknown city yields an empty list.
    pub async fn unseen_places(
        &self,
        user_id: Option<AccountId>,
        city_id: &str,
    ) -> Result<Vec<Place>, DomainError> {
        let places = self.catalogue.places_for_city(city_id);
        let Some(user_id) = user_id else {
            return Ok(places.into_iter().cloned().collect());
        };
        let decisions = self.preferences.decisions_for_user(user_id).await?;
        Ok(filter::unseen(places, &decisions))
    }

    pub async fn liked_places(&self, user_id: AccountId) -> Result<Vec<Place>, DomainError> {
        let liked = self.preferences.liked_place_ids(user_id).await?;
        Ok(self
            .catalogue
            .places_by_ids(&liked)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn progress(
        &self,
        user_id: AccountId,
        city_id: &str,
    ) -> Result<CityProgress, DomainError> {
        if self.catalogue.city(city_id).is_none() {
            return Err(DomainError::UnknownCity(city_id.to_string()));
        }
        let decisions = self.preferences.decisions_for_user(user_id).await?;
        let progress = filter::progress(self.catalogue.places_for_city(city_id), &decisions);
        Ok(CityProgress::new(city_id, progress))
    }
}
