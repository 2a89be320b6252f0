/// Solve a problem and record what the harness reports about it.
use std::time::Instant;

use pipenet::search::SearchStop;
use pipenet::{solve, Problem};
use serde::{Deserialize, Serialize};

/// Result of solving a single problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Solver answer, if the problem was valid.
    pub answer: Option<usize>,
    /// Validation error, if the problem was rejected.
    pub error: Option<String>,
    /// Edges in the primary spanning tree.
    pub tree_edges: usize,
    /// Inactive edges in the primary spanning tree.
    pub inactive: usize,
    /// Whether the tree connects every facility.
    pub spanning: bool,
    /// Rebuilt trees during the alternative search (0 when not triggered).
    pub search_iterations: usize,
    /// How the alternative search ended, if it ran.
    pub search_stop: Option<SearchStop>,
    /// Solve time in microseconds.
    pub solve_time_us: u64,
}

/// Validate and solve `problem`, timing the solve.
pub fn evaluate(problem: &Problem) -> CaseResult {
    let network = match problem.network() {
        Ok(network) => network,
        Err(e) => {
            return CaseResult {
                answer: None,
                error: Some(e.to_string()),
                tree_edges: 0,
                inactive: 0,
                spanning: false,
                search_iterations: 0,
                search_stop: None,
                solve_time_us: 0,
            }
        }
    };

    let start = Instant::now();
    let solution = solve(&network);
    let elapsed = start.elapsed();

    CaseResult {
        answer: Some(solution.answer),
        error: None,
        tree_edges: solution.tree.len(),
        inactive: solution.inactive,
        spanning: solution.spanning,
        search_iterations: solution.search.as_ref().map_or(0, |s| s.iterations),
        search_stop: solution.search.as_ref().map(|s| s.stop),
        solve_time_us: elapsed.as_micros() as u64,
    }
}
