//! Fastest-route planner.
//!
//! This module implements the core planning algorithm: exhaustive
//! depth-first enumeration of the simple paths from origin to
//! destination through the leg catalog, followed by per-path
//! feasibility evaluation and selection of the minimum travel time.
//!
//! The two phases are separate operations with explicit inputs and
//! outputs: [`Planner::enumerate_paths`] produces candidate paths,
//! [`Planner::evaluate`] produces one result per candidate plus the
//! fastest feasible one. [`Planner::plan`] chains both.

mod evaluate;
mod search;
mod trip;

pub use evaluate::{Evaluation, Outcome, PathResult};
pub use search::{CandidatePath, PlanError, Planner};
pub use trip::TripRequest;
