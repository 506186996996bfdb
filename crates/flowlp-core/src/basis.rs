use crate::Status;

/// Snapshot of every row and column status, used to replay a known basis
/// into a later solve (warm start).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Basis {
    /// Status of each row, by 0-based row index
    pub rows: Vec<Status>,
    /// Status of each column, by 0-based column index
    pub columns: Vec<Status>,
}

impl Basis {
    pub fn new(rows: Vec<Status>, columns: Vec<Status>) -> Self {
        Self { rows, columns }
    }

    /// Number of basic entries across rows and columns.
    ///
    /// A basis the simplex method can start from has exactly one basic entry
    /// per row.
    pub fn num_basic(&self) -> usize {
        self.rows
            .iter()
            .chain(&self.columns)
            .filter(|s| s.is_basic())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.num_basic() == self.rows.len()
    }
}
