//! Wall-clock time handling for trip planning.
//!
//! Itinerary data provides times as "HH:mm" strings with no date
//! attached. This module provides a fixed-epoch time-of-day type and a
//! duration span type for chaining leg times, with `chrono::Duration`
//! interop for elapsed-time arithmetic.

use chrono::Duration;
use std::fmt;
use std::ops::Add;

/// Error returned when parsing an invalid time or span string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock instant, stored as minutes since midnight of a fixed
/// epoch day.
///
/// Adding a [`TravelSpan`] can push the value past 24 hours; the raw
/// minute count keeps accumulating so that elapsed-time arithmetic
/// stays correct across midnight, while `Display` wraps back to
/// `HH:mm`.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{ClockTime, TravelSpan};
///
/// let depart = ClockTime::parse_hhmm("23:30").unwrap();
/// let arrive = depart + TravelSpan::parse_hhmm("01:00").unwrap();
/// assert_eq!(arrive.to_string(), "00:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Parse a time from strict "HH:mm" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_planner::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("0920").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// assert!(ClockTime::parse_hhmm("9:20").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hour, minute) = split_hhmm(s)?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Returns the hour of day (0-23).
    pub fn hour(&self) -> u32 {
        (self.minutes / 60) % 24
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Minutes since the epoch midnight, not wrapped at 24 hours.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.minutes
    }

    /// Returns the signed elapsed time from `earlier` to `self`.
    pub fn signed_duration_since(&self, earlier: ClockTime) -> Duration {
        Duration::minutes(i64::from(self.minutes) - i64::from(earlier.minutes))
    }
}

impl Add<TravelSpan> for ClockTime {
    type Output = ClockTime;

    fn add(self, span: TravelSpan) -> ClockTime {
        ClockTime {
            minutes: self.minutes + span.minutes,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A span of hours and minutes, parsed from "HH:mm" duration text.
///
/// Unlike [`ClockTime`] the hour component is not bounded by the day;
/// "26:30" is a valid span of twenty-six and a half hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelSpan {
    minutes: u32,
}

impl TravelSpan {
    /// Parse a span from "HH:mm" format (minutes 0-59).
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hours, minutes) = split_hhmm(s)?;
        Ok(Self {
            minutes: hours * 60 + minutes,
        })
    }

    /// Total length of the span in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.minutes
    }

    /// Converts the span to a `chrono::Duration`.
    pub fn to_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.minutes))
    }
}

impl fmt::Display for TravelSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

/// Split a strict "HH:mm" string into its two numeric components.
fn split_hhmm(s: &str) -> Result<(u32, u32), TimeError> {
    if s.len() != 5 {
        return Err(TimeError::new("expected HH:mm format"));
    }

    let bytes = s.as_bytes();
    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    Ok((hour, minute))
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = ClockTime::parse_hhmm("09:20").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 20);
        assert_eq!(t.minutes_from_midnight(), 560);

        assert!(ClockTime::parse_hhmm("00:00").is_ok());
        assert!(ClockTime::parse_hhmm("23:59").is_ok());
    }

    #[test]
    fn parse_invalid_times() {
        assert!(ClockTime::parse_hhmm("").is_err());
        assert!(ClockTime::parse_hhmm("9:20").is_err());
        assert!(ClockTime::parse_hhmm("0920").is_err());
        assert!(ClockTime::parse_hhmm("09-20").is_err());
        assert!(ClockTime::parse_hhmm("24:00").is_err());
        assert!(ClockTime::parse_hhmm("09:60").is_err());
        assert!(ClockTime::parse_hhmm("ab:cd").is_err());
        assert!(ClockTime::parse_hhmm("09:200").is_err());
    }

    #[test]
    fn display_roundtrip() {
        for s in ["00:00", "09:05", "12:30", "23:59"] {
            assert_eq!(ClockTime::parse_hhmm(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn add_span() {
        let t = ClockTime::parse_hhmm("09:20").unwrap();
        let span = TravelSpan::parse_hhmm("03:20").unwrap();
        assert_eq!((t + span).to_string(), "12:40");
    }

    #[test]
    fn add_span_across_midnight() {
        let t = ClockTime::parse_hhmm("22:30").unwrap();
        let span = TravelSpan::parse_hhmm("04:00").unwrap();
        let arrived = t + span;

        // Display wraps, elapsed arithmetic does not.
        assert_eq!(arrived.to_string(), "02:30");
        assert_eq!(
            arrived.signed_duration_since(t),
            Duration::minutes(4 * 60)
        );
    }

    #[test]
    fn signed_duration_since_orders() {
        let early = ClockTime::parse_hhmm("08:00").unwrap();
        let late = ClockTime::parse_hhmm("12:00").unwrap();

        assert_eq!(late.signed_duration_since(early), Duration::hours(4));
        assert_eq!(early.signed_duration_since(late), Duration::hours(-4));
        assert!(early < late);
    }

    #[test]
    fn span_allows_large_hours() {
        let span = TravelSpan::parse_hhmm("26:30").unwrap();
        assert_eq!(span.total_minutes(), 26 * 60 + 30);
        assert_eq!(span.to_string(), "26:30");
    }

    #[test]
    fn span_rejects_invalid_minutes() {
        assert!(TravelSpan::parse_hhmm("01:60").is_err());
        assert!(TravelSpan::parse_hhmm("1h30").is_err());
        assert!(TravelSpan::parse_hhmm("").is_err());
    }

    #[test]
    fn span_to_duration() {
        let span = TravelSpan::parse_hhmm("06:10").unwrap();
        assert_eq!(span.to_duration(), Duration::minutes(370));
    }
}
