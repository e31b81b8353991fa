//! Travel leg type.
//!
//! A `Leg` is one scheduled, timed connection between two cities:
//! it departs its origin at a fixed wall-clock time and takes a fixed
//! span to reach its destination.

use std::fmt;

use super::{ClockTime, DomainError, TravelSpan};

/// A single directed, timed edge between two cities.
///
/// Built from the four ordered string fields of an itinerary record
/// and never mutated afterwards. All fields are validated at
/// construction, so code that receives a `Leg` can trust its times.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Leg;
///
/// let leg = Leg::new("09:20", "Paris", "Amsterdam", "03:20").unwrap();
/// assert_eq!(leg.to_string(), "Paris - Amsterdam");
/// assert_eq!(leg.arrival().to_string(), "12:40");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    departure: ClockTime,
    origin: String,
    destination: String,
    duration: TravelSpan,
}

impl Leg {
    /// Construct a leg from raw string fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any field is empty, or if the departure time
    /// or duration text is not valid "HH:mm".
    pub fn new(
        departure_time: &str,
        origin: &str,
        destination: &str,
        duration: &str,
    ) -> Result<Self, DomainError> {
        if departure_time.is_empty() {
            return Err(DomainError::MissingField("leg departure time"));
        }
        if origin.is_empty() {
            return Err(DomainError::MissingField("leg origin city"));
        }
        if destination.is_empty() {
            return Err(DomainError::MissingField("leg destination city"));
        }
        if duration.is_empty() {
            return Err(DomainError::MissingField("leg duration"));
        }

        Ok(Leg {
            departure: ClockTime::parse_hhmm(departure_time)?,
            origin: origin.to_string(),
            destination: destination.to_string(),
            duration: TravelSpan::parse_hhmm(duration)?,
        })
    }

    /// Returns the scheduled departure time.
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

    /// Returns the travel duration.
    pub fn duration(&self) -> TravelSpan {
        self.duration
    }

    /// Returns the arrival time when the leg is caught at its
    /// scheduled departure.
    pub fn arrival(&self) -> ClockTime {
        self.departure + self.duration
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_construction_valid() {
        let leg = Leg::new("09:20", "Paris", "Amsterdam", "03:20").unwrap();

        assert_eq!(leg.departure(), ClockTime::parse_hhmm("09:20").unwrap());
        assert_eq!(leg.origin(), "Paris");
        assert_eq!(leg.destination(), "Amsterdam");
        assert_eq!(leg.duration(), TravelSpan::parse_hhmm("03:20").unwrap());
    }

    #[test]
    fn leg_display() {
        let leg = Leg::new("09:30", "Paris", "Bruxelles", "01:30").unwrap();
        assert_eq!(leg.to_string(), "Paris - Bruxelles");
    }

    #[test]
    fn leg_arrival() {
        let leg = Leg::new("12:30", "Amsterdam", "Berlin", "06:10").unwrap();
        assert_eq!(leg.arrival().to_string(), "18:40");
    }

    #[test]
    fn leg_empty_departure_time() {
        let result = Leg::new("", "Paris", "Amsterdam", "03:20");
        assert_eq!(
            result,
            Err(DomainError::MissingField("leg departure time"))
        );
    }

    #[test]
    fn leg_empty_origin() {
        let result = Leg::new("09:20", "", "Amsterdam", "03:20");
        assert_eq!(result, Err(DomainError::MissingField("leg origin city")));
    }

    #[test]
    fn leg_empty_destination() {
        let result = Leg::new("09:20", "Paris", "", "03:20");
        assert_eq!(
            result,
            Err(DomainError::MissingField("leg destination city"))
        );
    }

    #[test]
    fn leg_empty_duration() {
        let result = Leg::new("09:20", "Paris", "Amsterdam", "");
        assert_eq!(result, Err(DomainError::MissingField("leg duration")));
    }

    #[test]
    fn leg_invalid_departure_time() {
        let result = Leg::new("25:00", "Paris", "Amsterdam", "03:20");
        assert!(matches!(result, Err(DomainError::InvalidTime(_))));
    }

    #[test]
    fn leg_invalid_duration() {
        let result = Leg::new("09:20", "Paris", "Amsterdam", "1h30");
        assert!(matches!(result, Err(DomainError::InvalidTime(_))));
    }
}
