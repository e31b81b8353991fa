//! Candidate path enumeration.
//!
//! Finds every simple directed path from the trip origin to the trip
//! destination through the leg catalog. The traversal is depth-first
//! over an explicit stack of partial paths, so termination does not
//! depend on the input graph being acyclic.

use std::fmt;

use crate::domain::Leg;

use super::trip::TripRequest;

/// Error from planner construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The leg catalog was empty
    #[error("leg catalog is empty")]
    EmptyCatalog,
}

/// An ordered sequence of legs forming a simple route from the trip
/// origin to the trip destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath<'a> {
    legs: Vec<&'a Leg>,
}

impl<'a> CandidatePath<'a> {
    /// Returns the legs of this path, in travel order.
    pub fn legs(&self) -> &[&'a Leg] {
        &self.legs
    }

    /// Returns the number of legs in this path.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if this path has no legs.
    ///
    /// Paths produced by enumeration always have at least one leg;
    /// this exists for completeness of the collection-like API.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl fmt::Display for CandidatePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leg) in self.legs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{leg}")?;
        }
        Ok(())
    }
}

/// Fastest-route planner over a borrowed leg catalog.
///
/// The planner never copies or mutates the catalog; all search and
/// evaluation state lives in the values the phase methods return, so
/// each phase can be re-run without clearing anything first.
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    legs: &'a [Leg],
}

impl<'a> Planner<'a> {
    /// Create a planner over a leg catalog.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the catalog is empty.
    pub fn new(legs: &'a [Leg]) -> Result<Self, PlanError> {
        if legs.is_empty() {
            return Err(PlanError::EmptyCatalog);
        }
        Ok(Planner { legs })
    }

    /// Returns the legs departing from `city`, preserving catalog
    /// order. Empty when no leg matches; never an error.
    pub fn legs_from(&self, city: &str) -> Vec<&'a Leg> {
        self.legs.iter().filter(|leg| leg.origin() == city).collect()
    }

    /// Enumerate every simple path from the request origin to the
    /// request destination.
    ///
    /// Candidates appear in depth-first order: legs are tried in
    /// catalog order and each branch is explored to completion before
    /// its later siblings. A leg that would revisit a city already on
    /// the partial path (or the origin) is skipped, so enumeration
    /// terminates even on cyclic catalogs. A city with no outbound
    /// legs is a dead end and contributes no candidate.
    pub fn enumerate_paths(&self, request: &TripRequest) -> Vec<CandidatePath<'a>> {
        let mut found = Vec::new();
        let mut stack: Vec<Vec<&'a Leg>> = vec![Vec::new()];

        while let Some(path) = stack.pop() {
            if let Some(last) = path.last() {
                if last.destination() == request.destination() {
                    found.push(CandidatePath { legs: path });
                    continue;
                }
            }

            let frontier = path
                .last()
                .map_or(request.origin(), |leg| leg.destination());

            // Push extensions in reverse so the LIFO pop order matches
            // catalog order.
            for leg in self.legs_from(frontier).into_iter().rev() {
                let next = leg.destination();
                let revisits = next != request.destination()
                    && (next == request.origin()
                        || path.iter().any(|prior| prior.destination() == next));
                if revisits {
                    continue;
                }

                let mut extended = path.clone();
                extended.push(leg);
                stack.push(extended);
            }
        }

        tracing::debug!(
            origin = request.origin(),
            destination = request.destination(),
            candidates = found.len(),
            "path enumeration complete"
        );

        found
    }
}
