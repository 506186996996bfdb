use thiserror::Error;

/// Usage errors raised at the solver interface.
///
/// These reject the call and leave the problem untouched. Infeasible or
/// unbounded problems and engine breakdowns are not errors; they are reported
/// through [`SolutionStatus`](crate::SolutionStatus).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LpError {
    #[error("No problem has been created")]
    NoProblem,
    #[error("Row {index} out of range: problem has {count} rows")]
    RowOutOfRange { index: usize, count: usize },
    #[error("Column {index} out of range: problem has {count} columns")]
    ColumnOutOfRange { index: usize, count: usize },
    #[error("Column {column} references row {row} more than once")]
    DuplicateRow { column: usize, row: usize },
    #[error("Column {0} already has constraint coefficients")]
    CoefficientsAlreadySet(usize),
    #[error("Invalid bounds: lower {lower}, upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("Invalid coefficient: {0}")]
    InvalidCoefficient(f64),
    #[error("No solution available: solve has not run since the last change")]
    NotSolved,
    #[error("Invalid basis: {basic} basic variables for {rows} rows")]
    InvalidBasis { basic: usize, rows: usize },
    #[error(
        "Basis covers {rows} rows and {columns} columns, problem has {expected_rows} rows and {expected_columns} columns"
    )]
    BasisSizeMismatch {
        rows: usize,
        columns: usize,
        expected_rows: usize,
        expected_columns: usize,
    },
    #[error("Unknown native status code: {0}")]
    UnknownStatusCode(i32),
}
