//! Billing domain errors

use core_kernel::TemporalError;
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// Target month is not a valid `YYYY-MM` month
    #[error("Invalid target month: {0}")]
    InvalidTargetMonth(#[from] TemporalError),
}

/// A field of an item record that cannot be used for billing
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// Field absent or null
    #[error("missing field `{0}`")]
    Missing(&'static str),

    /// Field present but not convertible
    #[error("field `{field}` is not a valid {expected}: {value}")]
    Invalid {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl FieldError {
    pub fn invalid(field: &'static str, expected: &'static str, value: impl ToString) -> Self {
        FieldError::Invalid {
            field,
            expected,
            value: value.to_string(),
        }
    }
}
