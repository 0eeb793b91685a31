//! Error types for statistics derivation.

use thiserror::Error;

/// Errors that can occur while deriving statistics from monthly readings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    /// A month (or the whole year) produced no energy, so no share can be computed.
    #[error("No energy produced in {month}, self-consumption share is undefined")]
    ZeroProduction { month: String },

    /// Derived rows do not line up with the readings they were derived from.
    #[error("Derived statistics are not aligned with readings: expected {expected} months, got {actual}")]
    MisalignedMonths { expected: usize, actual: usize },

    /// A derived row belongs to a different month than the reading at the same position.
    #[error("Row {index} is {actual} but the reading is {expected}")]
    MonthMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
}
