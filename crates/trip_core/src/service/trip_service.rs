//! Trip use-case service.
//!
//! # Responsibility
//! - Build the trip detail summary (schedule count, spend, checklist).
//! - Run the checklist toggle flow as get-or-create, copy, replace.
//!
//! # Invariants
//! - `trip_summary` is read-only; it never creates a checklist.
//! - An empty trip id summarizes to zero counts, never to "all trips".

use crate::model::checklist::{ChecklistCompletion, ChecklistItem, ChecklistState};
use crate::model::expense::Expense;
use crate::model::trip::Trip;
use crate::service::input::parse_amount;
use crate::store::{StoreResult, TripStore};
use serde::Serialize;

/// Aggregate rendered by the trip detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    /// `None` when the id does not resolve to a trip.
    pub trip: Option<Trip>,
    pub schedule_count: usize,
    pub expense_total: u64,
    pub checklist: ChecklistCompletion,
}

/// Use-case facade borrowing the process store.
pub struct TripService<'store> {
    store: &'store mut TripStore,
}

impl<'store> TripService<'store> {
    pub fn new(store: &'store mut TripStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TripStore {
        &*self.store
    }

    /// Builds the detail summary for one trip.
    pub fn trip_summary(&self, trip_id: &str) -> TripSummary {
        let checklist = if trip_id.is_empty() {
            ChecklistCompletion::none()
        } else {
            self.store.checklist_completion(trip_id)
        };

        TripSummary {
            trip: self.store.find_trip(trip_id).cloned(),
            schedule_count: self.store.schedule_count(trip_id),
            expense_total: self.store.expense_total(trip_id),
            checklist,
        }
    }

    /// Adds an expense from raw form fields.
    ///
    /// # Errors
    /// - `InvalidExpense` on empty label/date or a non-positive or
    ///   non-numeric amount.
    pub fn add_expense_input(
        &mut self,
        trip_id: &str,
        label: &str,
        raw_amount: &str,
        date: &str,
    ) -> StoreResult<Expense> {
        self.store
            .add_expense(trip_id, label, parse_amount(raw_amount), date)
    }

    /// Flips one checklist item and returns the stored record.
    pub fn toggle_checklist_item(
        &mut self,
        trip_id: &str,
        item: ChecklistItem,
    ) -> StoreResult<ChecklistState> {
        let next = self.store.get_or_create_checklist(trip_id).toggled(item);
        self.store.update_checklist(trip_id, next.clone())?;
        Ok(next)
    }
}
