//! Catalogue loading from `cities.json` and `places.json`.

use crate::domain::catalogue::{
    entity::{City, Place},
    store::Catalogue,
};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

pub const CITIES_FILE: &str = "cities.json";
pub const PLACES_FILE: &str = "places.json";

pub fn load_from_dir(dir: &Path) -> anyhow::Result<Catalogue> {
    let cities: Vec<City> = read_json(&dir.join(CITIES_FILE))?;
    let places: Vec<Place> = read_json(&dir.join(PLACES_FILE))?;
    let catalogue = Catalogue::new(cities, places)
        .with_context(|| format!("Invalid catalogue in {}", dir.display()))?;
    tracing::info!(
        dir = %dir.display(),
        cities = catalogue.cities().len(),
        places = catalogue.place_count(),
        "Loaded catalogue from disk"
    );
    Ok(catalogue)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
