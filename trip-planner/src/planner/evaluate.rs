//! Feasibility evaluation and fastest-path selection.
//!
//! Walks each candidate path chaining arrival and departure times,
//! records one result per candidate (feasible or not), and retains the
//! feasible result with the smallest total travel time.

use crate::domain::ClockTime;

use super::search::{CandidatePath, Planner};
use super::trip::TripRequest;

/// The outcome of evaluating one candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every leg could be caught.
    Feasible {
        /// Total travel time in whole hours (half-up rounded),
        /// rendered as a string.
        travel_time: String,
        /// Arrival time at the destination.
        arrival: ClockTime,
    },
    /// Some leg had already departed when the traveler reached its
    /// origin city. Not an error: infeasible paths are ordinary
    /// results.
    Infeasible,
}

impl Outcome {
    /// Returns true if every leg of the path could be caught.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Outcome::Feasible { .. })
    }

    /// Returns the rounded-hours travel time, if feasible.
    pub fn travel_time(&self) -> Option<&str> {
        match self {
            Outcome::Feasible { travel_time, .. } => Some(travel_time),
            Outcome::Infeasible => None,
        }
    }

    /// Returns the arrival time, if feasible.
    pub fn arrival(&self) -> Option<ClockTime> {
        match self {
            Outcome::Feasible { arrival, .. } => Some(*arrival),
            Outcome::Infeasible => None,
        }
    }
}

/// The result recorded for one candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<'a> {
    outcome: Outcome,
    path: CandidatePath<'a>,
}

impl<'a> PathResult<'a> {
    /// Returns the outcome of this candidate.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the candidate path itself.
    pub fn path(&self) -> &CandidatePath<'a> {
        &self.path
    }
}

/// The evaluation of a full candidate set.
///
/// Holds exactly one result per candidate, in candidate order.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    results: Vec<PathResult<'a>>,
    fastest: Option<usize>,
}

impl<'a> Evaluation<'a> {
    /// Returns all per-candidate results, in candidate order.
    pub fn results(&self) -> &[PathResult<'a>] {
        &self.results
    }

    /// Returns the feasible result with the smallest travel time, or
    /// `None` when no candidate was feasible. Callers must check this
    /// before presenting a route.
    pub fn fastest(&self) -> Option<&PathResult<'a>> {
        self.fastest.map(|i| &self.results[i])
    }
}

impl<'a> Planner<'a> {
    /// Evaluate every candidate path against the request clock.
    ///
    /// For each candidate, in order: start the clock at the requested
    /// departure; a leg is caught only if the clock is strictly before
    /// its scheduled departure, in which case the clock advances to
    /// that departure plus the leg duration (waiting is implicit and
    /// unbounded). A missed leg makes the whole path infeasible and
    /// the remaining legs are not examined.
    ///
    /// Every candidate yields exactly one result, so
    /// `evaluation.results().len()` always equals `candidates.len()`.
    /// The fastest slot updates only on a strictly smaller travel-time
    /// string, so the first-seen minimum in candidate order wins.
    pub fn evaluate(
        &self,
        request: &TripRequest,
        candidates: Vec<CandidatePath<'a>>,
    ) -> Evaluation<'a> {
        let mut results: Vec<PathResult<'a>> = Vec::with_capacity(candidates.len());
        let mut fastest: Option<usize> = None;

        for path in candidates {
            let outcome = evaluate_path(request, &path);

            if let Outcome::Feasible { travel_time, .. } = &outcome {
                let improves = match fastest.and_then(|i| results[i].outcome.travel_time()) {
                    Some(best) => travel_time.as_str() < best,
                    None => true,
                };
                if improves {
                    fastest = Some(results.len());
                }
            }

            results.push(PathResult { outcome, path });
        }

        tracing::debug!(
            results = results.len(),
            feasible = results.iter().filter(|r| r.outcome.is_feasible()).count(),
            "evaluation complete"
        );

        Evaluation { results, fastest }
    }

    /// Run both phases: enumerate candidates, then evaluate them.
    pub fn plan(&self, request: &TripRequest) -> Evaluation<'a> {
        let candidates = self.enumerate_paths(request);
        self.evaluate(request, candidates)
    }
}

/// Chain one candidate's leg times from the requested departure.
fn evaluate_path(request: &TripRequest, path: &CandidatePath<'_>) -> Outcome {
    let mut clock = request.departure();

    for leg in path.legs() {
        if clock >= leg.departure() {
            // Missed the connection: the leg had already departed.
            return Outcome::Infeasible;
        }
        clock = leg.arrival();
    }

    let elapsed = clock.signed_duration_since(request.departure());
    Outcome::Feasible {
        travel_time: rounded_hours(elapsed.num_minutes()),
        arrival: clock,
    }
}

/// Render a minute count as whole hours, rounded half-up.
fn rounded_hours(minutes: i64) -> String {
    ((minutes + 30) / 60).to_string()
}
