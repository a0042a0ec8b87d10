//! Trip domain model.
//!
//! # Responsibility
//! - Define the top-level travel plan that owns all other records.
//!
//! # Invariants
//! - `id` is unique across the trip collection.
//! - Dates are kept as `YYYY-MM-DD` text and are not parsed.

use serde::{Deserialize, Serialize};

/// Foreign-key string linking child records to their owning trip.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TripId = String;

/// Top-level travel plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Stable unique id, supplied by the caller on insert.
    pub id: TripId,
    pub title: String,
    pub location: String,
    /// `YYYY-MM-DD`, not validated.
    pub start_date: String,
    /// `YYYY-MM-DD`, not validated.
    pub end_date: String,
}

impl Trip {
    /// Creates a trip with a generated random id.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self::with_id(
            super::generate_id(),
            title,
            location,
            start_date,
            end_date,
        )
    }

    /// Creates a trip with a caller-provided id.
    ///
    /// Used by seeding and by callers that already hold an identity.
    pub fn with_id(
        id: impl Into<TripId>,
        title: impl Into<String>,
        location: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Returns the `start ~ end` period label shown on detail views.
    pub fn period(&self) -> String {
        format!("{} ~ {}", self.start_date, self.end_date)
    }
}
