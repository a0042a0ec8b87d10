//! Trip store container and its query/mutation operations.
//!
//! # Responsibility
//! - Hold the four record collections for one process or one test.
//! - Filter child records by trip and derive aggregates on read.
//!
//! # Invariants
//! - Trip ids are unique; a duplicate insert is declined.
//! - At most one checklist exists per trip id.
//! - Expense rows always satisfy `Expense::try_new` validation.

use super::filter::TripFilter;
use super::seed::seed_data;
use super::{StoreError, StoreResult};
use crate::model::checklist::{ChecklistCompletion, ChecklistState};
use crate::model::expense::Expense;
use crate::model::schedule::ScheduleItem;
use crate::model::trip::Trip;
use log::{debug, info, warn};

/// Construction options for `TripStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Insert the demo Tokyo trip and its child records on construction.
    pub seed_demo_data: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

/// Process-local in-memory repository for travel-planning records.
///
/// Construct one instance at start-up and pass it by reference to callers.
#[derive(Debug, Clone)]
pub struct TripStore {
    trips: Vec<Trip>,
    schedule: Vec<ScheduleItem>,
    expenses: Vec<Expense>,
    checklists: Vec<ChecklistState>,
}

impl Default for TripStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TripStore {
    /// Creates a store holding the demo seed.
    pub fn new() -> Self {
        Self::with_options(&StoreOptions::default())
    }

    /// Creates a store with all four collections empty.
    pub fn empty() -> Self {
        Self::with_options(&StoreOptions {
            seed_demo_data: false,
        })
    }

    pub fn with_options(options: &StoreOptions) -> Self {
        let mut store = Self {
            trips: Vec::new(),
            schedule: Vec::new(),
            expenses: Vec::new(),
            checklists: Vec::new(),
        };
        if options.seed_demo_data {
            let seed = seed_data();
            store.trips.push(seed.trip);
            store.schedule.extend(seed.schedule);
            store.expenses.extend(seed.expenses);
            store.checklists.push(seed.checklist);
        }
        info!(
            "event=store_init module=store status=ok seeded={} trips={} schedule={} expenses={} checklists={}",
            options.seed_demo_data,
            store.trips.len(),
            store.schedule.len(),
            store.expenses.len(),
            store.checklists.len()
        );
        store
    }

    /// Returns all trips in insertion order.
    pub fn list_trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn find_trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    /// Appends a trip whose id was generated by the caller.
    ///
    /// # Errors
    /// - `DuplicateTrip` when a trip with the same id already exists.
    pub fn add_trip(&mut self, trip: Trip) -> StoreResult<()> {
        if self.find_trip(&trip.id).is_some() {
            warn!(
                "event=trip_add module=store status=rejected reason=duplicate_id trip_id={}",
                trip.id
            );
            return Err(StoreError::DuplicateTrip(trip.id));
        }
        info!("event=trip_add module=store status=ok trip_id={}", trip.id);
        self.trips.push(trip);
        Ok(())
    }

    /// Lists schedule items for `trip_id`; the empty id lists every trip's items.
    pub fn list_schedule(&self, trip_id: &str) -> Vec<&ScheduleItem> {
        self.list_schedule_by(&TripFilter::from_trip_id(trip_id))
    }

    pub fn list_schedule_by(&self, filter: &TripFilter) -> Vec<&ScheduleItem> {
        self.schedule
            .iter()
            .filter(|item| filter.matches(&item.trip_id))
            .collect()
    }

    /// Counts schedule items owned by exactly `trip_id`.
    ///
    /// Unlike `list_schedule`, the empty id counts nothing.
    pub fn schedule_count(&self, trip_id: &str) -> usize {
        if trip_id.is_empty() {
            return 0;
        }
        self.schedule
            .iter()
            .filter(|item| item.trip_id == trip_id)
            .count()
    }

    /// Appends a schedule item with a generated id and returns it.
    ///
    /// Field contents are not validated; empty strings are stored as given.
    pub fn add_schedule(
        &mut self,
        trip_id: &str,
        title: impl Into<String>,
        time: impl Into<String>,
        memo: impl Into<String>,
    ) -> ScheduleItem {
        let item = ScheduleItem::new(trip_id, title, time, memo);
        info!(
            "event=schedule_add module=store status=ok trip_id={} schedule_id={}",
            item.trip_id, item.id
        );
        self.schedule.push(item.clone());
        item
    }

    /// Lists expenses for `trip_id`; the empty id lists every trip's expenses.
    pub fn list_expenses(&self, trip_id: &str) -> Vec<&Expense> {
        self.list_expenses_by(&TripFilter::from_trip_id(trip_id))
    }

    pub fn list_expenses_by(&self, filter: &TripFilter) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| filter.matches(&expense.trip_id))
            .collect()
    }

    /// Validates and appends an expense, returning the stored record.
    ///
    /// # Errors
    /// - `InvalidExpense` when `label` or `date` is empty or `amount <= 0`.
    ///   The collection is left unchanged.
    pub fn add_expense(
        &mut self,
        trip_id: &str,
        label: impl Into<String>,
        amount: i64,
        date: impl Into<String>,
    ) -> StoreResult<Expense> {
        let expense = match Expense::try_new(trip_id, label, amount, date) {
            Ok(expense) => expense,
            Err(err) => {
                warn!(
                    "event=expense_add module=store status=rejected reason={} trip_id={}",
                    err.code(),
                    trip_id
                );
                return Err(err.into());
            }
        };
        info!(
            "event=expense_add module=store status=ok trip_id={} expense_id={}",
            expense.trip_id, expense.id
        );
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Sums expense amounts owned by exactly `trip_id`; 0 when none match.
    ///
    /// The sum saturates at `u64::MAX`.
    pub fn expense_total(&self, trip_id: &str) -> u64 {
        if trip_id.is_empty() {
            return 0;
        }
        self.expenses
            .iter()
            .filter(|expense| expense.trip_id == trip_id)
            .fold(0u64, |total, expense| total.saturating_add(expense.amount))
    }

    /// Looks up the checklist for `trip_id` without creating one.
    pub fn find_checklist(&self, trip_id: &str) -> Option<&ChecklistState> {
        self.checklists
            .iter()
            .find(|state| state.trip_id == trip_id)
    }

    /// Returns the checklist for `trip_id`, persisting an all-unchecked one
    /// first when none exists.
    pub fn get_or_create_checklist(&mut self, trip_id: &str) -> ChecklistState {
        if let Some(existing) = self.find_checklist(trip_id) {
            return existing.clone();
        }
        self.insert_default_checklist(trip_id)
    }

    fn insert_default_checklist(&mut self, trip_id: &str) -> ChecklistState {
        debug_assert!(self.find_checklist(trip_id).is_none());
        let state = ChecklistState::unchecked(trip_id);
        info!("event=checklist_create module=store status=ok trip_id={trip_id}");
        self.checklists.push(state.clone());
        state
    }

    /// Replaces the checklist for `trip_id` with `updated` as a whole record.
    ///
    /// The stored record always keeps `trip_id` as its key.
    ///
    /// # Errors
    /// - `ChecklistNotFound` when no checklist was established for `trip_id`;
    ///   call `get_or_create_checklist` first. Nothing is written.
    pub fn update_checklist(&mut self, trip_id: &str, updated: ChecklistState) -> StoreResult<()> {
        let Some(slot) = self
            .checklists
            .iter_mut()
            .find(|state| state.trip_id == trip_id)
        else {
            warn!("event=checklist_update module=store status=miss trip_id={trip_id}");
            return Err(StoreError::ChecklistNotFound(trip_id.to_string()));
        };

        *slot = ChecklistState {
            trip_id: trip_id.to_string(),
            ..updated
        };
        debug!(
            "event=checklist_update module=store status=ok trip_id={} checked={}",
            trip_id,
            slot.checked_count()
        );
        Ok(())
    }

    /// Returns `checked of 5` for `trip_id`, or `0 of 5` when no checklist
    /// exists. Never creates a checklist.
    pub fn checklist_completion(&self, trip_id: &str) -> ChecklistCompletion {
        self.find_checklist(trip_id)
            .map(ChecklistState::completion)
            .unwrap_or_else(ChecklistCompletion::none)
    }
}

#[cfg(test)]
mod tests {
    use super::TripStore;
    use crate::model::checklist::ChecklistItem;

    #[test]
    fn get_or_create_runs_query_then_conditional_insert() {
        let mut store = TripStore::empty();
        assert!(store.find_checklist("t1").is_none());

        let created = store.get_or_create_checklist("t1");
        assert_eq!(created.checked_count(), 0);
        assert_eq!(store.find_checklist("t1"), Some(&created));
        assert_eq!(store.checklists.len(), 1);

        store.get_or_create_checklist("t1");
        assert_eq!(store.checklists.len(), 1);
    }

    #[test]
    fn update_keeps_trip_id_as_key() {
        let mut store = TripStore::empty();
        let state = store.get_or_create_checklist("t1");
        let mut foreign = state.with(ChecklistItem::Charger, true);
        foreign.trip_id = "t2".to_string();

        store.update_checklist("t1", foreign).unwrap();

        assert!(store.find_checklist("t2").is_none());
        assert!(store.find_checklist("t1").unwrap().charger);
    }

    #[test]
    fn empty_store_has_no_records() {
        let store = TripStore::empty();
        assert!(store.list_trips().is_empty());
        assert!(store.list_schedule("").is_empty());
        assert!(store.list_expenses("").is_empty());
        assert!(store.checklists.is_empty());
    }
}
