//! Expense domain model.
//!
//! # Responsibility
//! - Define the per-trip spending record.
//! - Own the only load-bearing input validation in the store.
//!
//! # Invariants
//! - A stored expense always has a non-empty label and date.
//! - A stored expense always has `amount > 0`.

use super::trip::TripId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One spending entry for a trip, in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub trip_id: TripId,
    pub label: String,
    pub amount: u64,
    /// Free text, usually `YYYY-MM-DD`.
    pub date: String,
}

/// Reason an expense input was declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyLabel,
    NonPositiveAmount(i64),
    EmptyDate,
}

impl ExpenseValidationError {
    /// Stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyLabel => "empty_label",
            Self::NonPositiveAmount(_) => "non_positive_amount",
            Self::EmptyDate => "empty_date",
        }
    }
}

impl Display for ExpenseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "expense label cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "expense amount must be positive, got {amount}")
            }
            Self::EmptyDate => write!(f, "expense date cannot be empty"),
        }
    }
}

impl Error for ExpenseValidationError {}

impl Expense {
    /// Validates raw input and builds an expense with a generated id.
    ///
    /// # Errors
    /// - `EmptyLabel` when `label` is empty.
    /// - `NonPositiveAmount` when `amount <= 0`.
    /// - `EmptyDate` when `date` is empty.
    pub fn try_new(
        trip_id: impl Into<TripId>,
        label: impl Into<String>,
        amount: i64,
        date: impl Into<String>,
    ) -> Result<Self, ExpenseValidationError> {
        let label = label.into();
        let date = date.into();

        if label.is_empty() {
            return Err(ExpenseValidationError::EmptyLabel);
        }
        let amount = match u64::try_from(amount) {
            Ok(value) if value > 0 => value,
            _ => return Err(ExpenseValidationError::NonPositiveAmount(amount)),
        };
        if date.is_empty() {
            return Err(ExpenseValidationError::EmptyDate);
        }

        Ok(Self {
            id: super::generate_id(),
            trip_id: trip_id.into(),
            label,
            amount,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Expense, ExpenseValidationError};

    #[test]
    fn try_new_checks_label_before_amount() {
        let err = Expense::try_new("t1", "", 0, "").unwrap_err();
        assert_eq!(err, ExpenseValidationError::EmptyLabel);
    }

    #[test]
    fn try_new_rejects_zero_and_negative_identically() {
        let zero = Expense::try_new("t1", "Hotel", 0, "2025-01-01").unwrap_err();
        let negative = Expense::try_new("t1", "Hotel", -5, "2025-01-01").unwrap_err();
        assert_eq!(zero.code(), negative.code());
        assert_eq!(zero.code(), "non_positive_amount");
    }

    #[test]
    fn try_new_accepts_valid_input() {
        let expense = Expense::try_new("t1", "Hotel", 200_000, "2025-05-01").unwrap();
        assert_eq!(expense.amount, 200_000);
        assert!(!expense.id.is_empty());
    }
}
