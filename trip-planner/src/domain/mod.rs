//! Domain types for the trip planner.
//!
//! This module contains the core domain model types that represent
//! validated itinerary data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod error;
mod leg;
mod time;

pub use error::DomainError;
pub use leg::Leg;
pub use time::{ClockTime, TimeError, TravelSpan};
