//! Domain error types.
//!
//! These errors represent validation failures at the data boundary:
//! raw itinerary tuples that cannot become valid domain values.

use super::TimeError;

/// Domain-level errors for leg and trip construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A required field was empty or missing
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A departure time or duration field did not parse
    #[error(transparent)]
    InvalidTime(#[from] TimeError),
}
