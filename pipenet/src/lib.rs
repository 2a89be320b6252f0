pub mod discount;
pub mod edge;
pub mod error;
pub mod kruskal;
pub mod network;
pub mod parse;
pub mod search;
pub mod solve;
#[cfg(feature = "serde")]
pub mod suite;
pub mod unionfind;

pub use error::{InputError, ParseError};
pub use network::{Network, PipeRecord, Problem};
pub use solve::{solve, Solution};

/// Minimum number of inactive pipes for a network of `n` facilities with
/// `m` pipe records and discount threshold `d`.
///
/// The first `n - 1` records are existing (active) pipes, the rest would
/// have to be built.
pub fn compute_result(
    n: usize,
    m: usize,
    d: i64,
    pipes: &[PipeRecord],
) -> Result<usize, InputError> {
    let network = Network::build(n, m, d, pipes)?;
    Ok(solve(&network).answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(list: &[(usize, usize, i64)]) -> Vec<PipeRecord> {
        list.iter().copied().map(PipeRecord::from).collect()
    }

    #[test]
    fn single_pipe() {
        assert_eq!(compute_result(2, 1, 5, &records(&[(1, 2, 10)])), Ok(0));
    }

    #[test]
    fn triangle_with_inactive_shortcut() {
        let pipes = records(&[(1, 2, 1), (2, 3, 2), (1, 3, 3)]);
        assert_eq!(compute_result(3, 3, 0, &pipes), Ok(0));
    }

    #[test]
    fn two_active_equal_pipes() {
        let pipes = records(&[(1, 2, 5), (2, 3, 5)]);
        assert_eq!(compute_result(3, 2, 100, &pipes), Ok(0));
    }

    #[test]
    fn strictly_largest_inactive_pipe_is_required() {
        // both active pipes join 1-2; node 3 needs a new pipe
        let n = 3;
        let pipes = records(&[(1, 2, 1), (1, 2, 4), (2, 3, 8), (1, 3, 9)]);
        assert_eq!(compute_result(n, 4, 2, &pipes), Ok(1));
    }

    #[test]
    fn mismatched_count_is_invalid() {
        let pipes = records(&[(1, 2, 1)]);
        assert_eq!(
            compute_result(2, 3, 0, &pipes),
            Err(InputError::EdgeCount {
                declared: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn overflowing_costs_are_invalid() {
        let pipes = records(&[(1, 2, i64::MAX), (2, 3, i64::MAX)]);
        assert_eq!(compute_result(3, 2, 0, &pipes), Err(InputError::CostOverflow));
    }

    #[test]
    fn huge_node_count_is_invalid() {
        assert!(matches!(
            compute_result(usize::MAX, 0, 0, &[]),
            Err(InputError::TooManyNodes { .. })
        ));
    }

    #[test]
    fn out_of_range_node_is_invalid() {
        let pipes = records(&[(1, 5, 1)]);
        assert!(matches!(
            compute_result(2, 1, 0, &pipes),
            Err(InputError::NodeOutOfRange { node: 5, .. })
        ));
    }
}
