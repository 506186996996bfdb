use flowlp_core::SolutionStatus;

/// Problem-level result of a simplex run.
///
/// Per-row and per-column values live on the [`Problem`](crate::Problem) and
/// are read through its accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run ended
    pub status: SolutionStatus,
    /// Objective at the final point; NaN when no point was computed
    pub objective_value: f64,
    /// Simplex iterations performed, bound flips included
    pub iterations: usize,
}
