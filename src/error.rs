use crate::prelude::*;
use crate::Date;

/// Errors reported by date construction, arithmetic and schedule enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A numeric argument is outside its documented domain.
    #[error("{what} {value} is out of range ({min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The operation is undefined on the empty date.
    #[error("`{0}` is undefined on the empty date")]
    InvalidState(&'static str),

    /// The empty date was passed where a real date is required.
    #[error("argument `{0}` must not be the empty date")]
    EmptyArgument(&'static str),

    /// The result would fall outside 0001-01-01..=9999-12-31.
    #[error("date arithmetic overflowed the range 0001-01-01..=9999-12-31")]
    Overflow,
}

impl DateError {
    pub(crate) fn out_of_range(
        what: &'static str,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Self::OutOfRange {
            what,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Errors from parsing an ISO `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "{_0}")]
    OutOfRange(DateError),
}

impl std::error::Error for ParseError {}

impl From<DateError> for ParseError {
    fn from(err: DateError) -> Self {
        Self::OutOfRange(err)
    }
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: Date, end: Date },

    /// Error parsing date component.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A bound is the empty date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}
