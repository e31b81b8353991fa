//! Fastest multi-leg trip planner.
//!
//! Answers: "given these scheduled legs between cities, what is the
//! fastest way from my origin to my destination, leaving no earlier
//! than this time?"

pub mod domain;
pub mod planner;
pub mod reader;
pub mod report;
