use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct City {
    pub id: String,
    pub name: String,
}

/// A place that can be swiped on.
///
/// Places are immutable once the catalogue is loaded. `city_id` always refers
/// to a city of the same catalogue and `tags` carries no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Place {
    pub id: String,
    #[serde(alias = "cityId")]
    pub city_id: String,
    pub name: String,
    pub excerpt: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    #[serde(default, alias = "imageAttribution")]
    pub image_attribution: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
