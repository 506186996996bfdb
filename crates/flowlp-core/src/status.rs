use std::fmt;

/// Simplex classification of a row (auxiliary) or column (structural) variable.
///
/// This is the vocabulary callers persist and replay across solves, so every
/// engine binding must round-trip all five values exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// Active in the basis
    Basic,
    /// Non-basic at its lower bound
    Lower,
    /// Non-basic at its upper bound
    Upper,
    /// Non-basic fixed variable (lower == upper)
    Fixed,
    /// Non-basic free variable
    Free,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Basic,
        Status::Lower,
        Status::Upper,
        Status::Fixed,
        Status::Free,
    ];

    pub fn is_basic(self) -> bool {
        matches!(self, Status::Basic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Basic => "basic",
            Status::Lower => "lower",
            Status::Upper => "upper",
            Status::Fixed => "fixed",
            Status::Free => "free",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a solve stopped without a verdict on the problem itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EngineFailure {
    /// The configured iteration limit was reached
    IterationLimit,
    /// The starting basis matrix could not be factorized
    SingularBasis,
    /// Refactorization or the ratio test broke down mid-solve
    NumericalInstability,
}

impl EngineFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineFailure::IterationLimit => "iteration_limit",
            EngineFailure::SingularBasis => "singular_basis",
            EngineFailure::NumericalInstability => "numerical_instability",
        }
    }
}

/// Terminal outcome of the most recent solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolutionStatus {
    /// No solve has run since the problem was created or last changed
    #[default]
    Undefined,
    /// An optimal basic solution was found
    Optimal,
    /// The problem has no feasible point
    Infeasible,
    /// The objective can decrease without limit
    Unbounded,
    /// The engine gave up; no conclusion about the problem
    Failed(EngineFailure),
}

impl SolutionStatus {
    pub fn is_optimal(self) -> bool {
        matches!(self, SolutionStatus::Optimal)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, SolutionStatus::Failed(_))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolutionStatus::Undefined => "undefined",
            SolutionStatus::Optimal => "optimal",
            SolutionStatus::Infeasible => "infeasible",
            SolutionStatus::Unbounded => "unbounded",
            SolutionStatus::Failed(failure) => failure.as_str(),
        }
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
