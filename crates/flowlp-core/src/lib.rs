//! Solver-independent interface for linear programs over bipartite flow
//! variables.
//!
//! - [`LpSolver`]: the operations an engine must expose
//! - [`Status`]: basis status of a row or column, used for warm starts
//! - [`SolutionStatus`]: outcome of a solve
//! - [`LpError`]: usage errors
//! - [`Basis`]: a replayable snapshot of all statuses

mod basis;
mod bounds;
mod error;
mod solver;
mod status;

pub use basis::Basis;
pub use bounds::BoundType;
pub use error::LpError;
pub use solver::LpSolver;
pub use status::{EngineFailure, SolutionStatus, Status};
