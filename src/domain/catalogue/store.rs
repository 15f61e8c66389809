use super::entity::{City, Place};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("duplicate city id '{0}'")]
    DuplicateCity(String),
    #[error("duplicate place id '{0}'")]
    DuplicatePlace(String),
    #[error("place '{place_id}' references unknown city '{city_id}'")]
    UnknownCity { place_id: String, city_id: String },
}

/// Immutable set of cities and places, indexed by city.
///
/// Cities keep the order they were loaded in; places keep catalogue order both
/// globally and within each city.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    cities: Vec<City>,
    places: Vec<Place>,
    city_index: HashMap<String, usize>,
    place_index: HashMap<String, usize>,
    places_by_city: HashMap<String, Vec<usize>>,
}

impl Catalogue {
    pub fn new(cities: Vec<City>, places: Vec<Place>) -> Result<Self, CatalogueError> {
        let mut city_index = HashMap::with_capacity(cities.len());
        for (i, city) in cities.iter().enumerate() {
            if city_index.insert(city.id.clone(), i).is_some() {
                return Err(CatalogueError::DuplicateCity(city.id.clone()));
            }
        }

        let mut place_index = HashMap::with_capacity(places.len());
        let mut places_by_city: HashMap<String, Vec<usize>> = HashMap::new();
        let places: Vec<Place> = places.into_iter().map(dedup_tags).collect();
        for (i, place) in places.iter().enumerate() {
            if !city_index.contains_key(&place.city_id) {
                return Err(CatalogueError::UnknownCity {
                    place_id: place.id.clone(),
                    city_id: place.city_id.clone(),
                });
            }
            if place_index.insert(place.id.clone(), i).is_some() {
                return Err(CatalogueError::DuplicatePlace(place.id.clone()));
            }
            places_by_city
                .entry(place.city_id.clone())
                .or_default()
                .push(i);
        }

        Ok(Self {
            cities,
            places,
            city_index,
            place_index,
            places_by_city,
        })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.city_index.get(id).map(|&i| &self.cities[i])
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        self.place_index.get(id).map(|&i| &self.places[i])
    }

    /// Places of one city in catalogue order. Unknown cities yield nothing.
    pub fn places_for_city(&self, city_id: &str) -> Vec<&Place> {
        self.places_by_city
            .get(city_id)
            .map(|indices| indices.iter().map(|&i| &self.places[i]).collect())
            .unwrap_or_default()
    }

    /// Places whose id is in `ids`, in catalogue order. Unknown ids are ignored.
    pub fn places_by_ids(&self, ids: &HashSet<String>) -> Vec<&Place> {
        let mut indices: Vec<usize> = ids
            .iter()
            .filter_map(|id| self.place_index.get(id).copied())
            .collect();
        indices.sort_unstable();
        indices.into_iter().map(|i| &self.places[i]).collect()
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }
}

fn dedup_tags(mut place: Place) -> Place {
    let mut seen = HashSet::with_capacity(place.tags.len());
    place.tags.retain(|tag| seen.insert(tag.clone()));
    place
}
