//! In-memory trip data store.
//!
//! # Responsibility
//! - Own the trip, schedule, expense and checklist collections.
//! - Compute derived aggregates (counts, sums, completion) on read.
//!
//! # Invariants
//! - Collections preserve insertion order; nothing is ever removed.
//! - Every mutation appends or replaces a whole record.
//! - A rejected call leaves every collection unchanged.

use crate::model::expense::ExpenseValidationError;
use crate::model::trip::TripId;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod filter;
pub mod seed;
mod shared;
mod trip_store;

pub use filter::TripFilter;
pub use shared::SharedTripStore;
pub use trip_store::{StoreOptions, TripStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Reason a store write was declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A trip with this id already exists.
    DuplicateTrip(TripId),
    InvalidExpense(ExpenseValidationError),
    /// No checklist has been established for this trip yet.
    ChecklistNotFound(TripId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTrip(id) => write!(f, "trip already exists: {id}"),
            Self::InvalidExpense(err) => write!(f, "{err}"),
            Self::ChecklistNotFound(id) => write!(f, "checklist not found for trip: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidExpense(err) => Some(err),
            Self::DuplicateTrip(_) | Self::ChecklistNotFound(_) => None,
        }
    }
}

impl From<ExpenseValidationError> for StoreError {
    fn from(value: ExpenseValidationError) -> Self {
        Self::InvalidExpense(value)
    }
}
