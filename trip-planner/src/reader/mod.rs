//! Flat-text itinerary data boundary.
//!
//! The input format is line-oriented, fields separated by `;`:
//! line 0 is the trip descriptor (`departureTime;origin;destination`),
//! line 1 is a leg count and is ignored, every further line is a leg
//! (`departureTime;origin;destination;duration`). The core never sees
//! this encoding; this module turns it into domain values.

use std::path::Path;

use crate::domain::{DomainError, Leg};
use crate::planner::TripRequest;

/// Error from reading or parsing itinerary data.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Failed to read the data file
    #[error("failed to read itinerary data: {0}")]
    Io(#[from] std::io::Error),

    /// The input had no trip descriptor line
    #[error("missing trip descriptor line")]
    MissingTripLine,

    /// The trip descriptor did not have exactly three fields
    #[error("trip descriptor has {found} fields, expected 3")]
    TripFieldCount { found: usize },

    /// A leg line did not have exactly four fields
    #[error("leg on line {line} has {found} fields, expected 4")]
    LegFieldCount { line: usize, found: usize },

    /// A field failed domain validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Read the raw itinerary text from a file.
pub fn load(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "itinerary data loaded");
    Ok(raw)
}

/// Parse raw itinerary text into a trip request and a leg catalog.
///
/// Accepts both `\r\n` and `\n` line terminators; blank lines among
/// the legs are skipped.
///
/// # Errors
///
/// Returns `Err` on a missing trip line, a wrong field count, or any
/// field that fails domain validation.
pub fn parse(raw: &str) -> Result<(TripRequest, Vec<Leg>), ReadError> {
    let mut lines = raw.lines();

    let trip_line = lines.next().ok_or(ReadError::MissingTripLine)?;
    let fields: Vec<&str> = trip_line.split(';').collect();
    if fields.len() != 3 {
        return Err(ReadError::TripFieldCount {
            found: fields.len(),
        });
    }
    let request = TripRequest::new(fields[0], fields[1], fields[2])?;

    // Line 1 carries a leg count; the catalog speaks for itself.
    let _ = lines.next();

    let mut legs = Vec::new();
    for (offset, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != 4 {
            return Err(ReadError::LegFieldCount {
                line: offset + 2,
                found: fields.len(),
            });
        }
        legs.push(Leg::new(fields[0], fields[1], fields[2], fields[3])?);
    }

    Ok((request, legs))
}
