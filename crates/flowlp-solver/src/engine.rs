//! [`LpSolver`] on top of the native [`Problem`].
//!
//! This is the only place where caller indices (0-based) become native
//! ordinals (1-based) and where [`Status`] meets [`VarStat`].

use flowlp_core::{LpError, LpSolver, SolutionStatus, Status};
use tracing::debug;

use crate::config::SimplexConfig;
use crate::problem::{Problem, ProblemError, Sense, VarStat};
use crate::simplex;

/// Largest number of rows or columns reserved up front by `create_lp`.
const MAX_PRESIZE: usize = 1 << 16;

fn to_native(status: Status) -> VarStat {
    match status {
        Status::Basic => VarStat::Bs,
        Status::Lower => VarStat::Nl,
        Status::Upper => VarStat::Nu,
        Status::Fixed => VarStat::Ns,
        Status::Free => VarStat::Nf,
    }
}

fn from_native(stat: VarStat) -> Status {
    match stat {
        VarStat::Bs => Status::Basic,
        VarStat::Nl => Status::Lower,
        VarStat::Nu => Status::Upper,
        VarStat::Ns => Status::Fixed,
        VarStat::Nf => Status::Free,
    }
}

/// Caller status for a raw native status code.
pub fn status_from_code(code: i32) -> Result<Status, LpError> {
    Ok(from_native(VarStat::from_code(code)?))
}

/// 0-based caller index to native ordinal. Wrapping keeps `usize::MAX`
/// out of range instead of overflowing, and round-trips through [`index`].
fn ordinal(index: usize) -> usize {
    index.wrapping_add(1)
}

fn index(ordinal: usize) -> usize {
    ordinal.wrapping_sub(1)
}

impl From<ProblemError> for LpError {
    fn from(err: ProblemError) -> Self {
        match err {
            ProblemError::RowOutOfRange { ordinal, count } => LpError::RowOutOfRange {
                index: index(ordinal),
                count,
            },
            ProblemError::ColOutOfRange { ordinal, count } => LpError::ColumnOutOfRange {
                index: index(ordinal),
                count,
            },
            ProblemError::DuplicateRow { col, row } => LpError::DuplicateRow {
                column: index(col),
                row: index(row),
            },
            ProblemError::InvalidBounds { lower, upper } => LpError::InvalidBounds { lower, upper },
            ProblemError::InvalidCoefficient(value) => LpError::InvalidCoefficient(value),
            ProblemError::InvalidBasis { basic, rows } => LpError::InvalidBasis { basic, rows },
            ProblemError::NoSolution => LpError::NotSolved,
            ProblemError::UnknownStatusCode(code) => LpError::UnknownStatusCode(code),
        }
    }
}

/// Simplex-backed [`LpSolver`].
///
/// Owns at most one problem at a time.
#[derive(Debug, Clone, Default)]
pub struct SimplexSolver {
    lp: Option<Problem>,
    config: SimplexConfig,
}

impl SimplexSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimplexConfig) -> Self {
        Self { lp: None, config }
    }

    pub fn config(&self) -> &SimplexConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SimplexConfig) {
        self.config = config;
    }

    /// The native problem, for inspection.
    pub fn problem(&self) -> Option<&Problem> {
        self.lp.as_ref()
    }

    fn lp(&self) -> Result<&Problem, LpError> {
        self.lp.as_ref().ok_or(LpError::NoProblem)
    }

    fn lp_mut(&mut self) -> Result<&mut Problem, LpError> {
        self.lp.as_mut().ok_or(LpError::NoProblem)
    }
}

impl LpSolver for SimplexSolver {
    fn create_lp(&mut self, num_sources: usize, num_targets: usize) {
        let rows = num_sources.saturating_add(num_targets).min(MAX_PRESIZE);
        let cols = num_sources.saturating_mul(num_targets).min(MAX_PRESIZE);
        let mut lp = Problem::with_capacity(rows, cols);
        lp.set_sense(Sense::Minimize);
        self.lp = Some(lp);
        debug!(
            component = "engine",
            operation = "create",
            sources = num_sources as u64,
            targets = num_targets as u64,
            "Created LP"
        );
    }

    fn delete_lp(&mut self) {
        if self.lp.take().is_some() {
            debug!(component = "engine", operation = "delete", "Deleted LP");
        }
    }

    fn add_rows(&mut self, n: usize) -> Result<usize, LpError> {
        Ok(index(self.lp_mut()?.add_rows(n)))
    }

    fn add_columns(&mut self, n: usize) -> Result<usize, LpError> {
        Ok(index(self.lp_mut()?.add_cols(n)))
    }

    fn set_row_bounds(&mut self, row: usize, value: f64) -> Result<(), LpError> {
        Ok(self.lp_mut()?.set_row_bnds(ordinal(row), value, value)?)
    }

    fn row_bounds(&self, row: usize) -> Result<f64, LpError> {
        let (_, _, upper) = self.lp()?.row_bnds(ordinal(row))?;
        Ok(upper)
    }

    fn set_column_bounds(&mut self, col: usize, lower: f64, upper: f64) -> Result<(), LpError> {
        Ok(self.lp_mut()?.set_col_bnds(ordinal(col), lower, upper)?)
    }

    fn set_column_bounds_lower(&mut self, col: usize, lower: f64) -> Result<(), LpError> {
        if !lower.is_finite() {
            return Err(LpError::InvalidBounds {
                lower,
                upper: f64::INFINITY,
            });
        }
        Ok(self.lp_mut()?.set_col_bnds(ordinal(col), lower, f64::INFINITY)?)
    }

    fn set_column_objective(&mut self, col: usize, cost: f64) -> Result<(), LpError> {
        Ok(self.lp_mut()?.set_obj_coef(ordinal(col), cost)?)
    }

    fn set_column_coefficients(
        &mut self,
        col: usize,
        source: usize,
        target: usize,
    ) -> Result<(), LpError> {
        let lp = self.lp_mut()?;
        if !lp.mat_col(ordinal(col))?.is_empty() {
            return Err(LpError::CoefficientsAlreadySet(col));
        }
        lp.set_mat_col(ordinal(col), &[(ordinal(source), 1.0), (ordinal(target), -1.0)])?;
        Ok(())
    }

    fn column(&self, col: usize) -> Result<Vec<(usize, f64)>, LpError> {
        let entries = self.lp()?.mat_col(ordinal(col))?;
        Ok(entries
            .into_iter()
            .map(|(row, value)| (index(row), value))
            .collect())
    }

    fn column_status(&self, col: usize) -> Result<Status, LpError> {
        Ok(from_native(self.lp()?.col_stat(ordinal(col))?))
    }

    fn row_status(&self, row: usize) -> Result<Status, LpError> {
        Ok(from_native(self.lp()?.row_stat(ordinal(row))?))
    }

    fn set_column_status(&mut self, col: usize, status: Status) -> Result<(), LpError> {
        Ok(self.lp_mut()?.set_col_stat(ordinal(col), to_native(status))?)
    }

    fn set_row_status(&mut self, row: usize, status: Status) -> Result<(), LpError> {
        Ok(self.lp_mut()?.set_row_stat(ordinal(row), to_native(status))?)
    }

    fn setup_standard_basis(&mut self) -> Result<(), LpError> {
        self.lp_mut()?.std_basis();
        Ok(())
    }

    fn solve_lp(&mut self) -> Result<(), LpError> {
        let lp = self.lp.as_mut().ok_or(LpError::NoProblem)?;
        simplex::solve(lp, &self.config)?;
        Ok(())
    }

    fn objective_value(&self) -> Result<f64, LpError> {
        Ok(self.lp()?.obj_val()?)
    }

    fn iteration_count(&self) -> Result<usize, LpError> {
        let solution = self.lp()?.solution().ok_or(LpError::NotSolved)?;
        Ok(solution.iterations)
    }

    fn num_rows(&self) -> Result<usize, LpError> {
        Ok(self.lp()?.num_rows())
    }

    fn num_columns(&self) -> Result<usize, LpError> {
        Ok(self.lp()?.num_cols())
    }

    fn solution_status(&self) -> SolutionStatus {
        self.lp
            .as_ref()
            .map_or(SolutionStatus::Undefined, Problem::status)
    }

    fn row_dual(&self, row: usize) -> Result<f64, LpError> {
        Ok(self.lp()?.row_dual(ordinal(row))?)
    }

    fn row_primal(&self, row: usize) -> Result<f64, LpError> {
        Ok(self.lp()?.row_prim(ordinal(row))?)
    }

    fn column_primal(&self, col: usize) -> Result<f64, LpError> {
        Ok(self.lp()?.col_prim(ordinal(col))?)
    }

    fn column_dual(&self, col: usize) -> Result<f64, LpError> {
        Ok(self.lp()?.col_dual(ordinal(col))?)
    }
}
