/// Tuning knobs for the simplex engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimplexConfig {
    /// Iterations before the run stops with an iteration-limit failure
    pub max_iterations: usize,
    /// Bound violation tolerated on basic variables, relative to the bound
    pub feasibility_tolerance: f64,
    /// Reduced cost magnitude below which a variable is not priced in
    pub optimality_tolerance: f64,
    /// Smallest pivot element accepted by ratio test and factorization
    pub pivot_tolerance: f64,
    /// Basis changes between fresh factorizations
    pub refactor_interval: usize,
    /// Consecutive degenerate steps before switching to Bland's rule
    pub degenerate_cycle_limit: usize,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            feasibility_tolerance: 1e-9,
            optimality_tolerance: 1e-9,
            pivot_tolerance: 1e-11,
            refactor_interval: 50,
            degenerate_cycle_limit: 50,
        }
    }
}

impl SimplexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_feasibility_tolerance(mut self, tol: f64) -> Self {
        self.feasibility_tolerance = tol;
        self
    }

    pub fn with_optimality_tolerance(mut self, tol: f64) -> Self {
        self.optimality_tolerance = tol;
        self
    }

    pub fn with_pivot_tolerance(mut self, tol: f64) -> Self {
        self.pivot_tolerance = tol;
        self
    }

    pub fn with_refactor_interval(mut self, pivots: usize) -> Self {
        self.refactor_interval = pivots;
        self
    }

    pub fn with_degenerate_cycle_limit(mut self, steps: usize) -> Self {
        self.degenerate_cycle_limit = steps;
        self
    }
}
