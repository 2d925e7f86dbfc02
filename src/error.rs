use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be positive")]
    ZeroCount(&'static str),

    #[error("{name} is out of range: {value}")]
    InvalidCount { name: &'static str, value: u64 },

    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{0} must be sorted in ascending order")]
    Unsorted(&'static str),

    #[error("median needs an odd element count, got {0}")]
    EvenCount(usize),

    #[error("no feasible answer: {0}")]
    Infeasible(&'static str),

    #[error("invalid search config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
