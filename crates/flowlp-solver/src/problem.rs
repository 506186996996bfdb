//! Native problem object.
//!
//! Rows and columns are addressed by 1-based ordinals, the way C LP libraries
//! number them. Callers of the crate never see ordinals; [`SimplexSolver`]
//! translates from 0-based indices.
//!
//! [`SimplexSolver`]: crate::SimplexSolver

use flowlp_core::{BoundType, SolutionStatus};
use thiserror::Error;

use crate::solution::Solution;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("Row ordinal {ordinal} out of range 1..={count}")]
    RowOutOfRange { ordinal: usize, count: usize },
    #[error("Column ordinal {ordinal} out of range 1..={count}")]
    ColOutOfRange { ordinal: usize, count: usize },
    #[error("Column {col} lists row {row} twice")]
    DuplicateRow { col: usize, row: usize },
    #[error("Invalid bounds: lower {lower}, upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("Invalid coefficient: {0}")]
    InvalidCoefficient(f64),
    #[error("Invalid basis: {basic} basic variables for {rows} rows")]
    InvalidBasis { basic: usize, rows: usize },
    #[error("Problem has no current solution")]
    NoSolution,
    #[error("Unknown status code {0}")]
    UnknownStatusCode(i32),
}

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

/// Native status vocabulary, with the engine's integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum VarStat {
    /// Basic
    Bs = 1,
    /// Non-basic on lower bound
    Nl = 2,
    /// Non-basic on upper bound
    Nu = 3,
    /// Non-basic free
    Nf = 4,
    /// Non-basic fixed
    Ns = 5,
}

impl VarStat {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_basic(self) -> bool {
        self == VarStat::Bs
    }

    pub fn from_code(code: i32) -> Result<VarStat, ProblemError> {
        match code {
            1 => Ok(VarStat::Bs),
            2 => Ok(VarStat::Nl),
            3 => Ok(VarStat::Nu),
            4 => Ok(VarStat::Nf),
            5 => Ok(VarStat::Ns),
            _ => Err(ProblemError::UnknownStatusCode(code)),
        }
    }

    /// Non-basic status a variable of the given bound type takes by default.
    pub fn natural(kind: BoundType) -> VarStat {
        match kind {
            BoundType::Free => VarStat::Nf,
            BoundType::Lower | BoundType::Double => VarStat::Nl,
            BoundType::Upper => VarStat::Nu,
            BoundType::Fixed => VarStat::Ns,
        }
    }

    /// Non-basic status kept after a bound change, and the one the simplex
    /// method starts from.
    ///
    /// A double bound keeps `Nl` or `Nu`. A stored status that does not fit
    /// the bound type (e.g. `Nu` on a variable without an upper bound) falls
    /// back to the natural one.
    pub(crate) fn resolve(self, kind: BoundType) -> VarStat {
        match (kind, self) {
            (BoundType::Double, VarStat::Nu) => VarStat::Nu,
            _ => VarStat::natural(kind),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Row {
    pub(crate) kind: BoundType,
    pub(crate) lb: f64,
    pub(crate) ub: f64,
    pub(crate) stat: VarStat,
    pub(crate) prim: f64,
    pub(crate) dual: f64,
}

impl Row {
    fn new() -> Self {
        Self {
            kind: BoundType::Free,
            lb: f64::NEG_INFINITY,
            ub: f64::INFINITY,
            stat: VarStat::Bs,
            prim: 0.0,
            dual: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Col {
    pub(crate) kind: BoundType,
    pub(crate) lb: f64,
    pub(crate) ub: f64,
    pub(crate) coef: f64,
    pub(crate) stat: VarStat,
    /// (row slot, value), sorted by row, no zeros
    pub(crate) entries: Vec<(usize, f64)>,
    pub(crate) prim: f64,
    pub(crate) dual: f64,
}

impl Col {
    fn new() -> Self {
        Self {
            kind: BoundType::Free,
            lb: f64::NEG_INFINITY,
            ub: f64::INFINITY,
            coef: 0.0,
            stat: VarStat::Nf,
            entries: Vec::new(),
            prim: 0.0,
            dual: 0.0,
        }
    }
}

/// An LP problem: rows, columns, bounds, objective, statuses and the results
/// of the last simplex run.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    sense: Sense,
    pub(crate) rows: Vec<Row>,
    pub(crate) cols: Vec<Col>,
    /// `None` whenever the data changed after the last solve
    pub(crate) solution: Option<Solution>,
}

impl Problem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty problem with room for `rows` rows and `cols` columns.
    pub fn with_capacity(rows: usize, cols: usize) -> Self {
        Self {
            sense: Sense::Minimize,
            rows: Vec::with_capacity(rows),
            cols: Vec::with_capacity(cols),
            solution: None,
        }
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
        self.invalidate();
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cols.len()
    }

    /// Number of stored constraint coefficients.
    pub fn nnz(&self) -> usize {
        self.cols.iter().map(|col| col.entries.len()).sum()
    }

    /// Append `n` free basic rows; returns the ordinal of the first one.
    pub fn add_rows(&mut self, n: usize) -> usize {
        let first = self.rows.len() + 1;
        if n > 0 {
            self.rows.extend((0..n).map(|_| Row::new()));
            self.invalidate();
        }
        first
    }

    /// Append `n` free non-basic columns; returns the ordinal of the first one.
    pub fn add_cols(&mut self, n: usize) -> usize {
        let first = self.cols.len() + 1;
        if n > 0 {
            self.cols.extend((0..n).map(|_| Col::new()));
            self.invalidate();
        }
        first
    }

    pub fn set_row_bnds(&mut self, i: usize, lower: f64, upper: f64) -> Result<(), ProblemError> {
        let slot = self.row_slot(i)?;
        let kind = BoundType::classify(lower, upper)
            .ok_or(ProblemError::InvalidBounds { lower, upper })?;
        let row = &mut self.rows[slot];
        row.kind = kind;
        row.lb = lower;
        row.ub = upper;
        if !row.stat.is_basic() {
            row.stat = row.stat.resolve(kind);
        }
        self.invalidate();
        Ok(())
    }

    /// `(type, lower, upper)` of row `i`; missing limits are infinite.
    pub fn row_bnds(&self, i: usize) -> Result<(BoundType, f64, f64), ProblemError> {
        let row = &self.rows[self.row_slot(i)?];
        Ok((row.kind, row.lb, row.ub))
    }

    pub fn set_col_bnds(&mut self, j: usize, lower: f64, upper: f64) -> Result<(), ProblemError> {
        let slot = self.col_slot(j)?;
        let kind = BoundType::classify(lower, upper)
            .ok_or(ProblemError::InvalidBounds { lower, upper })?;
        let col = &mut self.cols[slot];
        col.kind = kind;
        col.lb = lower;
        col.ub = upper;
        if !col.stat.is_basic() {
            col.stat = col.stat.resolve(kind);
        }
        self.invalidate();
        Ok(())
    }

    pub fn col_bnds(&self, j: usize) -> Result<(BoundType, f64, f64), ProblemError> {
        let col = &self.cols[self.col_slot(j)?];
        Ok((col.kind, col.lb, col.ub))
    }

    pub fn set_obj_coef(&mut self, j: usize, coef: f64) -> Result<(), ProblemError> {
        let slot = self.col_slot(j)?;
        if !coef.is_finite() {
            return Err(ProblemError::InvalidCoefficient(coef));
        }
        self.cols[slot].coef = coef;
        self.invalidate();
        Ok(())
    }

    pub fn obj_coef(&self, j: usize) -> Result<f64, ProblemError> {
        Ok(self.cols[self.col_slot(j)?].coef)
    }

    /// Replace the constraint coefficients of column `j`.
    ///
    /// `entries` holds `(row ordinal, value)` pairs in any order. Zero values
    /// are dropped; a row may appear only once.
    pub fn set_mat_col(&mut self, j: usize, entries: &[(usize, f64)]) -> Result<(), ProblemError> {
        let slot = self.col_slot(j)?;
        let mut stored = Vec::with_capacity(entries.len());
        for &(i, value) in entries {
            let row = self.row_slot(i)?;
            if !value.is_finite() {
                return Err(ProblemError::InvalidCoefficient(value));
            }
            stored.push((row, value));
        }
        stored.sort_by_key(|&(row, _)| row);
        if let Some(pair) = stored.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(ProblemError::DuplicateRow {
                col: j,
                row: pair[0].0 + 1,
            });
        }
        stored.retain(|&(_, value)| value != 0.0);
        self.cols[slot].entries = stored;
        self.invalidate();
        Ok(())
    }

    /// `(row ordinal, value)` pairs of column `j`, ascending by row.
    pub fn mat_col(&self, j: usize) -> Result<Vec<(usize, f64)>, ProblemError> {
        let col = &self.cols[self.col_slot(j)?];
        Ok(col.entries.iter().map(|&(row, value)| (row + 1, value)).collect())
    }

    pub fn set_row_stat(&mut self, i: usize, stat: VarStat) -> Result<(), ProblemError> {
        let slot = self.row_slot(i)?;
        self.rows[slot].stat = stat;
        self.invalidate();
        Ok(())
    }

    pub fn row_stat(&self, i: usize) -> Result<VarStat, ProblemError> {
        Ok(self.rows[self.row_slot(i)?].stat)
    }

    pub fn set_col_stat(&mut self, j: usize, stat: VarStat) -> Result<(), ProblemError> {
        let slot = self.col_slot(j)?;
        self.cols[slot].stat = stat;
        self.invalidate();
        Ok(())
    }

    pub fn col_stat(&self, j: usize) -> Result<VarStat, ProblemError> {
        Ok(self.cols[self.col_slot(j)?].stat)
    }

    /// Standard basis: all rows basic, all columns at their natural bound.
    pub fn std_basis(&mut self) {
        for row in &mut self.rows {
            row.stat = VarStat::Bs;
        }
        for col in &mut self.cols {
            col.stat = VarStat::natural(col.kind);
        }
        self.invalidate();
    }

    /// Result of the last solve, if the problem has not changed since.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Status of the last solve, `Undefined` when there is none.
    pub fn status(&self) -> SolutionStatus {
        self.solution
            .as_ref()
            .map_or(SolutionStatus::Undefined, |solution| solution.status)
    }

    pub fn obj_val(&self) -> Result<f64, ProblemError> {
        Ok(self.require_solution()?.objective_value)
    }

    pub fn row_prim(&self, i: usize) -> Result<f64, ProblemError> {
        let slot = self.row_slot(i)?;
        self.require_solution()?;
        Ok(self.rows[slot].prim)
    }

    pub fn row_dual(&self, i: usize) -> Result<f64, ProblemError> {
        let slot = self.row_slot(i)?;
        self.require_solution()?;
        Ok(self.rows[slot].dual)
    }

    pub fn col_prim(&self, j: usize) -> Result<f64, ProblemError> {
        let slot = self.col_slot(j)?;
        self.require_solution()?;
        Ok(self.cols[slot].prim)
    }

    pub fn col_dual(&self, j: usize) -> Result<f64, ProblemError> {
        let slot = self.col_slot(j)?;
        self.require_solution()?;
        Ok(self.cols[slot].dual)
    }

    fn require_solution(&self) -> Result<&Solution, ProblemError> {
        self.solution.as_ref().ok_or(ProblemError::NoSolution)
    }

    fn invalidate(&mut self) {
        self.solution = None;
    }

    fn row_slot(&self, i: usize) -> Result<usize, ProblemError> {
        let count = self.rows.len();
        if i == 0 || i > count {
            return Err(ProblemError::RowOutOfRange { ordinal: i, count });
        }
        Ok(i - 1)
    }

    fn col_slot(&self, j: usize) -> Result<usize, ProblemError> {
        let count = self.cols.len();
        if j == 0 || j > count {
            return Err(ProblemError::ColOutOfRange { ordinal: j, count });
        }
        Ok(j - 1)
    }
}
