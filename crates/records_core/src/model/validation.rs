//! Shared field validation for academic record entities.
//!
//! # Responsibility
//! - Define the single "invalid argument" error kind raised by entities.
//! - Provide the field checks reused by every constructor and setter.
//!
//! # Invariants
//! - A check either accepts the value unchanged or returns an error; it never
//!   normalizes input.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field validation error raised at entity construction or assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required string field is empty or whitespace-only.
    EmptyField { field: &'static str },
    /// Numeric field falls outside its allowed domain.
    OutOfDomain { field: &'static str, value: String },
    /// Date lies after the reference date used for the check.
    FutureDate {
        field: &'static str,
        date: NaiveDate,
        today: NaiveDate,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "required field `{field}` is empty"),
            Self::OutOfDomain { field, value } => {
                write!(f, "value `{value}` is out of domain for `{field}`")
            }
            Self::FutureDate { field, date, today } => write!(
                f,
                "`{field}` ({date}) must not be later than today ({today})"
            ),
        }
    }
}

impl Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub(crate) fn require_non_blank(field: &'static str, value: String) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value)
}

pub(crate) fn require_positive(field: &'static str, value: i32) -> ValidationResult<i32> {
    if value <= 0 {
        return Err(ValidationError::OutOfDomain {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Accepts `value` when it lies in `[min, max]`. NaN is always rejected.
pub(crate) fn require_within(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> ValidationResult<f64> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfDomain {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

pub(crate) fn require_not_after(
    field: &'static str,
    date: NaiveDate,
    today: NaiveDate,
) -> ValidationResult<NaiveDate> {
    if date > today {
        return Err(ValidationError::FutureDate { field, date, today });
    }
    Ok(date)
}
