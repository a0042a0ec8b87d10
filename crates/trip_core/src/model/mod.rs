//! Travel-planning domain records.
//!
//! # Responsibility
//! - Define the four record shapes held by the trip store.
//! - Keep every record an immutable value: updates build a new record.
//!
//! # Invariants
//! - Every child record links to its owning trip through `trip_id`.
//! - Generated ids are random UUID v4 strings and never reused.

pub mod checklist;
pub mod expense;
pub mod schedule;
pub mod trip;

use uuid::Uuid;

/// Returns a fresh random id for any generated record.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
