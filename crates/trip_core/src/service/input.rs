//! Raw form-input conversion.

/// Parses a free-text amount field.
///
/// Surrounding whitespace is ignored. Non-numeric input maps to 0, which the
/// store then rejects as a non-positive amount.
pub fn parse_amount(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}
