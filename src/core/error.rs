use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    /// Seed lies outside a `rows` x `cols` grid.
    OutOfRangeSeed { row: usize, col: usize, rows: usize, cols: usize },
    /// Row `row` has `found` cells where the first row has `expected`.
    MalformedGrid { row: usize, expected: usize, found: usize },
    EmptyGrid,
    UnknownStrategy(String),
    Fixture(String),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRangeSeed { row, col, rows, cols } => {
                write!(f, "seed ({}, {}) out of range for {}x{} grid", row, col, rows, cols)
            }
            Self::MalformedGrid { row, expected, found } => {
                write!(f, "malformed grid: row {} has {} cells, expected {}", row, found, expected)
            }
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::UnknownStrategy(name) => write!(f, "unknown strategy: {}", name),
            Self::Fixture(msg) => write!(f, "invalid fixture: {}", msg),
        }
    }
}

impl std::error::Error for FillError {}

pub type Result<T> = std::result::Result<T, FillError>;
