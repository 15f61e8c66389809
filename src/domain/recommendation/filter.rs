//! Pure selection of the places a user still has to swipe on.

use crate::domain::catalogue::entity::Place;
use crate::domain::preference::entity::SwipeAction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// Places without a decision, in the order given.
pub fn unseen<'a, I>(places: I, decisions: &HashMap<String, SwipeAction>) -> Vec<Place>
where
    I: IntoIterator<Item = &'a Place>,
{
    places
        .into_iter()
        .filter(|place| !decisions.contains_key(&place.id))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SwipeProgress {
    pub total: usize,
    pub decided: usize,
    pub liked: usize,
    pub remaining: usize,
}

/// Counts decisions that fall on `places`; decisions on other cities' places
/// are ignored.
pub fn progress<'a, I>(places: I, decisions: &HashMap<String, SwipeAction>) -> SwipeProgress
where
    I: IntoIterator<Item = &'a Place>,
{
    let mut progress = SwipeProgress {
        total: 0,
        decided: 0,
        liked: 0,
        remaining: 0,
    };
    for place in places {
        progress.total += 1;
        match decisions.get(&place.id) {
            Some(SwipeAction::Like) => {
                progress.decided += 1;
                progress.liked += 1;
            }
            Some(SwipeAction::Skip) => progress.decided += 1,
            None => progress.remaining += 1,
        }
    }
    progress
}
