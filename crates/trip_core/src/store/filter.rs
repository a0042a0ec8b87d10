//! Trip filter for list queries.

/// Selects which child records a list query returns.
///
/// The empty-string trip id is the "all trips" sentinel; it maps to
/// `TripFilter::All` and never to a literal id comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripFilter {
    All,
    Trip(String),
}

impl TripFilter {
    pub fn from_trip_id(trip_id: &str) -> Self {
        if trip_id.is_empty() {
            Self::All
        } else {
            Self::Trip(trip_id.to_string())
        }
    }

    pub fn matches(&self, trip_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Trip(id) => id == trip_id,
        }
    }
}

impl From<&str> for TripFilter {
    fn from(value: &str) -> Self {
        Self::from_trip_id(value)
    }
}
