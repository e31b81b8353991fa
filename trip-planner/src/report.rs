//! Presentation of planning results.

use crate::planner::{Outcome, PathResult};

/// Render a feasible result as the one-line route summary.
///
/// Returns `None` for infeasible results; there is nothing useful to
/// present for those.
pub fn render(result: &PathResult<'_>) -> Option<String> {
    match result.outcome() {
        Outcome::Feasible {
            travel_time,
            arrival,
        } => Some(format!(
            "The fastest travel is: {} for {} hours, arrival at {}",
            result.path(),
            travel_time,
            arrival
        )),
        Outcome::Infeasible => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Leg;
    use crate::planner::{Planner, TripRequest};

    #[test]
    fn renders_fastest_route() {
        let legs = vec![
            Leg::new("09:20", "Paris", "Amsterdam", "01:00").unwrap(),
            Leg::new("12:30", "Amsterdam", "Berlin", "06:10").unwrap(),
        ];
        let planner = Planner::new(&legs).unwrap();
        let request = TripRequest::new("08:20", "Paris", "Berlin").unwrap();

        let evaluation = planner.plan(&request);
        let line = render(evaluation.fastest().unwrap()).unwrap();

        assert_eq!(
            line,
            "The fastest travel is: Paris - Amsterdam, Amsterdam - Berlin \
             for 10 hours, arrival at 18:40"
        );
    }

    #[test]
    fn infeasible_result_renders_nothing() {
        let legs = vec![
            Leg::new("09:20", "Paris", "Amsterdam", "03:20").unwrap(),
            Leg::new("12:30", "Amsterdam", "Berlin", "06:10").unwrap(),
        ];
        let planner = Planner::new(&legs).unwrap();
        let request = TripRequest::new("08:20", "Paris", "Berlin").unwrap();

        let evaluation = planner.plan(&request);
        assert!(render(&evaluation.results()[0]).is_none());
    }
}
