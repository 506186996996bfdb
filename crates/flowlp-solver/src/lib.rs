mod config;
mod engine;
mod problem;
mod simplex;
mod solution;

pub use config::SimplexConfig;
pub use engine::{SimplexSolver, status_from_code};
pub use problem::{Problem, ProblemError, Sense, VarStat};
pub use simplex::solve;
pub use solution::Solution;

pub use flowlp_core::{
    Basis, BoundType, EngineFailure, LpError, LpSolver, SolutionStatus, Status,
};
