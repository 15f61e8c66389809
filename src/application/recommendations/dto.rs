use crate::domain::recommendation::filter::SwipeProgress;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CityProgress {
    pub city_id: String,
    pub total: usize,
    pub decided: usize,
    pub liked: usize,
    pub remaining: usize,
}

impl CityProgress {
    pub fn new(city_id: &str, progress: SwipeProgress) -> Self {
        Self {
            city_id: city_id.to_string(),
            total: progress.total,
            decided: progress.decided,
            liked: progress.liked,
            remaining: progress.remaining,
        }
    }
}
