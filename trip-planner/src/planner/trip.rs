//! Trip request type.

use crate::domain::{ClockTime, DomainError};

/// A request to travel from an origin city to a destination city,
/// departing no earlier than a given time.
///
/// The request is immutable; search and evaluation state lives in the
/// values those phases return, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    departure: ClockTime,
    origin: String,
    destination: String,
}

impl TripRequest {
    /// Construct a trip request from raw string fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any field is empty or the departure time is
    /// not valid "HH:mm".
    pub fn new(
        departure_time: &str,
        origin: &str,
        destination: &str,
    ) -> Result<Self, DomainError> {
        if departure_time.is_empty() {
            return Err(DomainError::MissingField("trip departure time"));
        }
        if origin.is_empty() {
            return Err(DomainError::MissingField("trip origin city"));
        }
        if destination.is_empty() {
            return Err(DomainError::MissingField("trip destination city"));
        }

        Ok(TripRequest {
            departure: ClockTime::parse_hhmm(departure_time)?,
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    /// Returns the earliest departure time.
    pub fn departure(&self) -> ClockTime {
        self.departure
    }

    /// Returns the origin city.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the destination city.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_construction_valid() {
        let request = TripRequest::new("08:20", "Paris", "Berlin").unwrap();

        assert_eq!(request.departure().to_string(), "08:20");
        assert_eq!(request.origin(), "Paris");
        assert_eq!(request.destination(), "Berlin");
    }

    #[test]
    fn request_empty_fields_fail() {
        assert_eq!(
            TripRequest::new("", "Paris", "Berlin"),
            Err(DomainError::MissingField("trip departure time"))
        );
        assert_eq!(
            TripRequest::new("08:20", "", "Berlin"),
            Err(DomainError::MissingField("trip origin city"))
        );
        assert_eq!(
            TripRequest::new("08:20", "Paris", ""),
            Err(DomainError::MissingField("trip destination city"))
        );
    }

    #[test]
    fn request_invalid_departure_time() {
        let result = TripRequest::new("8h20", "Paris", "Berlin");
        assert!(matches!(result, Err(DomainError::InvalidTime(_))));
    }
}
