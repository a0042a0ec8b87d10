//! Core data store for the travel planner.
//! This crate is the single source of truth for trip records and the
//! aggregates derived from them.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::checklist::{ChecklistCompletion, ChecklistItem, ChecklistState, CHECKLIST_TOTAL};
pub use model::expense::{Expense, ExpenseValidationError};
pub use model::schedule::ScheduleItem;
pub use model::trip::{Trip, TripId};
pub use service::input::parse_amount;
pub use service::trip_service::{TripService, TripSummary};
pub use store::seed::SEED_TRIP_ID;
pub use store::{SharedTripStore, StoreError, StoreOptions, StoreResult, TripFilter, TripStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
