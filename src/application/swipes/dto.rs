use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw swipe input. `action` stays a string so an unsupported value is
/// reported as an invalid action rather than a malformed body.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordSwipeRequest {
    #[serde(default, alias = "placeId")]
    pub place_id: String,
    #[serde(default, alias = "choice")]
    pub action: String,
}
