use crate::{Basis, LpError, SolutionStatus, Status};

/// Operations an LP engine exposes to flow-based formulations.
///
/// Rows are constraints, columns are flow variables. Each column carries
/// exactly two structural coefficients: `+1` in its source row and `-1` in its
/// target row. The objective is always minimized.
///
/// All indices are 0-based. Engines that number rows and columns differently
/// translate inside their implementation of this trait and nowhere else.
///
/// # State
///
/// A solver starts without a problem. [`create_lp`](LpSolver::create_lp)
/// allocates one; any successful mutation afterwards discards the results of
/// the previous solve, so result accessors return [`LpError::NotSolved`] until
/// [`solve_lp`](LpSolver::solve_lp) runs again. Rejected calls change nothing.
pub trait LpSolver {
    /// Discard any current problem and start an empty minimization problem.
    ///
    /// The sizes are presizing hints only.
    fn create_lp(&mut self, num_sources: usize, num_targets: usize);

    /// Release the current problem, if any.
    fn delete_lp(&mut self);

    /// Append `n` free rows and return the index of the first one.
    fn add_rows(&mut self, n: usize) -> Result<usize, LpError>;

    /// Append `n` free columns without coefficients and return the index of the
    /// first one.
    fn add_columns(&mut self, n: usize) -> Result<usize, LpError>;

    /// Fix row `row` to `value` (lower = upper = value).
    fn set_row_bounds(&mut self, row: usize, value: f64) -> Result<(), LpError>;

    /// Upper bound of row `row`, `+inf` when it has none.
    fn row_bounds(&self, row: usize) -> Result<f64, LpError>;

    /// Box column `col` into `lower <= x <= upper`.
    fn set_column_bounds(&mut self, col: usize, lower: f64, upper: f64) -> Result<(), LpError>;

    /// Bound column `col` from below only.
    fn set_column_bounds_lower(&mut self, col: usize, lower: f64) -> Result<(), LpError>;

    fn set_column_objective(&mut self, col: usize, cost: f64) -> Result<(), LpError>;

    /// Give column `col` its incidence: `+1` in `source`, `-1` in `target`.
    ///
    /// Both rows must exist and differ. A column's incidence is set once.
    fn set_column_coefficients(
        &mut self,
        col: usize,
        source: usize,
        target: usize,
    ) -> Result<(), LpError>;

    /// Non-zero `(row, value)` pairs of column `col` in ascending row order.
    fn column(&self, col: usize) -> Result<Vec<(usize, f64)>, LpError>;

    fn column_status(&self, col: usize) -> Result<Status, LpError>;

    fn row_status(&self, row: usize) -> Result<Status, LpError>;

    fn set_column_status(&mut self, col: usize, status: Status) -> Result<(), LpError>;

    fn set_row_status(&mut self, row: usize, status: Status) -> Result<(), LpError>;

    /// Make every row basic and put every column at its natural bound.
    fn setup_standard_basis(&mut self) -> Result<(), LpError>;

    /// Run the engine from the current statuses.
    ///
    /// Infeasible, unbounded and engine failures are normal outcomes reported
    /// by [`solution_status`](LpSolver::solution_status); only usage errors
    /// are returned as `Err`.
    fn solve_lp(&mut self) -> Result<(), LpError>;

    fn objective_value(&self) -> Result<f64, LpError>;

    /// Simplex iterations performed by the most recent solve.
    fn iteration_count(&self) -> Result<usize, LpError>;

    fn num_rows(&self) -> Result<usize, LpError>;

    fn num_columns(&self) -> Result<usize, LpError>;

    /// Outcome of the most recent solve, `Undefined` if there is none.
    fn solution_status(&self) -> SolutionStatus;

    /// Dual value (shadow price) of row `row`.
    fn row_dual(&self, row: usize) -> Result<f64, LpError>;

    /// Activity of row `row`, i.e. the sum of its coefficients times the
    /// column values.
    fn row_primal(&self, row: usize) -> Result<f64, LpError>;

    fn column_primal(&self, col: usize) -> Result<f64, LpError>;

    /// Reduced cost of column `col`.
    fn column_dual(&self, col: usize) -> Result<f64, LpError>;

    fn is_optimal(&self) -> bool {
        self.solution_status().is_optimal()
    }

    /// Read every row and column status.
    fn basis(&self) -> Result<Basis, LpError> {
        let rows = (0..self.num_rows()?)
            .map(|row| self.row_status(row))
            .collect::<Result<Vec<_>, _>>()?;
        let columns = (0..self.num_columns()?)
            .map(|col| self.column_status(col))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Basis { rows, columns })
    }

    /// Replay a basis read with [`basis`](LpSolver::basis).
    ///
    /// The snapshot must cover exactly the current rows and columns.
    fn set_basis(&mut self, basis: &Basis) -> Result<(), LpError> {
        let expected_rows = self.num_rows()?;
        let expected_columns = self.num_columns()?;
        if basis.rows.len() != expected_rows || basis.columns.len() != expected_columns {
            return Err(LpError::BasisSizeMismatch {
                rows: basis.rows.len(),
                columns: basis.columns.len(),
                expected_rows,
                expected_columns,
            });
        }
        for (row, &status) in basis.rows.iter().enumerate() {
            self.set_row_status(row, status)?;
        }
        for (col, &status) in basis.columns.iter().enumerate() {
            self.set_column_status(col, status)?;
        }
        Ok(())
    }
}
