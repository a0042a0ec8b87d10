//! Preparation checklist model.
//!
//! # Responsibility
//! - Define the fixed five-item checklist and its per-trip state record.
//! - Provide copy-with-change helpers; flags are never mutated in place.
//!
//! # Invariants
//! - At most one `ChecklistState` exists per `trip_id` in the store.
//! - The item set is closed: `CHECKLIST_TOTAL` is always 5.

use super::trip::TripId;
use serde::{Deserialize, Serialize};

/// Number of preparation items in every checklist.
pub const CHECKLIST_TOTAL: usize = ChecklistItem::ALL.len();

/// One preparation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChecklistItem {
    Passport,
    Charger,
    HotelBooked,
    Insurance,
    ExchangeDone,
}

impl ChecklistItem {
    /// All items in display order.
    pub const ALL: [ChecklistItem; 5] = [
        ChecklistItem::Passport,
        ChecklistItem::Charger,
        ChecklistItem::HotelBooked,
        ChecklistItem::Insurance,
        ChecklistItem::ExchangeDone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Passport => "Passport",
            Self::Charger => "Charger",
            Self::HotelBooked => "Hotel booked",
            Self::Insurance => "Travel insurance",
            Self::ExchangeDone => "Currency exchanged",
        }
    }
}

/// Checklist flags for one trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistState {
    pub trip_id: TripId,
    pub passport: bool,
    pub charger: bool,
    pub hotel_booked: bool,
    pub insurance: bool,
    pub exchange_done: bool,
}

impl ChecklistState {
    /// Creates a state with every flag unchecked.
    pub fn unchecked(trip_id: impl Into<TripId>) -> Self {
        Self {
            trip_id: trip_id.into(),
            passport: false,
            charger: false,
            hotel_booked: false,
            insurance: false,
            exchange_done: false,
        }
    }

    pub fn is_checked(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::Passport => self.passport,
            ChecklistItem::Charger => self.charger,
            ChecklistItem::HotelBooked => self.hotel_booked,
            ChecklistItem::Insurance => self.insurance,
            ChecklistItem::ExchangeDone => self.exchange_done,
        }
    }

    /// Returns a copy of this state with one flag set to `value`.
    #[must_use]
    pub fn with(&self, item: ChecklistItem, value: bool) -> Self {
        let mut next = self.clone();
        match item {
            ChecklistItem::Passport => next.passport = value,
            ChecklistItem::Charger => next.charger = value,
            ChecklistItem::HotelBooked => next.hotel_booked = value,
            ChecklistItem::Insurance => next.insurance = value,
            ChecklistItem::ExchangeDone => next.exchange_done = value,
        }
        next
    }

    /// Returns a copy of this state with one flag flipped.
    #[must_use]
    pub fn toggled(&self, item: ChecklistItem) -> Self {
        self.with(item, !self.is_checked(item))
    }

    pub fn checked_count(&self) -> usize {
        ChecklistItem::ALL
            .iter()
            .filter(|item| self.is_checked(**item))
            .count()
    }

    pub fn completion(&self) -> ChecklistCompletion {
        ChecklistCompletion {
            checked: self.checked_count(),
            total: CHECKLIST_TOTAL,
        }
    }
}

/// Derived `checked of total` progress for one checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistCompletion {
    pub checked: usize,
    pub total: usize,
}

impl ChecklistCompletion {
    /// Progress for a trip that has no checklist yet.
    pub const fn none() -> Self {
        Self {
            checked: 0,
            total: CHECKLIST_TOTAL,
        }
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.checked)
    }

    /// Completion in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.checked as f64 / self.total as f64
    }
}

impl From<ChecklistCompletion> for (usize, usize) {
    fn from(value: ChecklistCompletion) -> Self {
        (value.checked, value.total)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChecklistCompletion, ChecklistItem, ChecklistState, CHECKLIST_TOTAL};

    #[test]
    fn total_is_five() {
        assert_eq!(CHECKLIST_TOTAL, 5);
    }

    #[test]
    fn with_returns_new_record_and_leaves_source_untouched() {
        let original = ChecklistState::unchecked("t1");
        let updated = original.with(ChecklistItem::Passport, true);
        assert!(!original.passport);
        assert!(updated.passport);
        assert_eq!(updated.trip_id, "t1");
    }

    #[test]
    fn toggled_flips_only_the_named_flag() {
        let state = ChecklistState::unchecked("t1")
            .toggled(ChecklistItem::Insurance)
            .toggled(ChecklistItem::Charger)
            .toggled(ChecklistItem::Charger);
        assert!(state.insurance);
        assert!(!state.charger);
        assert_eq!(state.checked_count(), 1);
    }

    #[test]
    fn completion_counts_three_of_five() {
        let state = ChecklistState {
            trip_id: "t1".to_string(),
            passport: true,
            charger: false,
            hotel_booked: true,
            insurance: false,
            exchange_done: true,
        };
        assert_eq!(<(usize, usize)>::from(state.completion()), (3, 5));
        assert_eq!(state.completion().remaining(), 2);
        assert!((state.completion().ratio() - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn none_is_zero_of_five() {
        let none = ChecklistCompletion::none();
        assert_eq!((none.checked, none.total), (0, 5));
        assert_eq!(none.ratio(), 0.0);
    }
}
