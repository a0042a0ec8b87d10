//! Schedule item domain model.
//!
//! # Invariants
//! - Insertion order in the store is display order.
//! - `title`/`time` are not validated here; empty strings are accepted.

use super::trip::TripId;
use serde::{Deserialize, Serialize};

/// One entry in a trip's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub trip_id: TripId,
    pub title: String,
    /// Free text, e.g. `10:00`.
    pub time: String,
    pub memo: String,
}

impl ScheduleItem {
    /// Creates a schedule item with a generated random id.
    pub fn new(
        trip_id: impl Into<TripId>,
        title: impl Into<String>,
        time: impl Into<String>,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            id: super::generate_id(),
            trip_id: trip_id.into(),
            title: title.into(),
            time: time.into(),
            memo: memo.into(),
        }
    }
}
