//! Errors produced while building, stepping or parsing a board.

use std::fmt;

use thiserror::Error;

use crate::pos::Position;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid board dimensions {rows}x{cols}, both must be non-negative")]
    InvalidDimension { rows: i64, cols: i64 },

    #[error("cell {position} is outside the {rows}x{cols} board")]
    IndexOutOfRange {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("invalid generation count {generations}, must be non-negative")]
    InvalidArgument { generations: i64 },

    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: MalformedReason },
}

impl Error {
    /// Short name of the error kind, used when reporting failures to the user.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimension { .. } => ErrorKind::InvalidDimension,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidDimension,
    IndexOutOfRange,
    InvalidArgument,
    MalformedInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidDimension => "InvalidDimension",
            Self::IndexOutOfRange => "IndexOutOfRange",
            Self::InvalidArgument => "InvalidArgument",
            Self::MalformedInput => "MalformedInput",
        };
        f.write_str(name)
    }
}

/// What exactly was wrong with a line of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected the {0}, found end of input")]
    MissingLine(&'static str),

    #[error("expected an integer {field}, found {found:?}")]
    NotAnInteger { field: &'static str, found: String },

    #[error("expected {expected} cells, found {found}")]
    RowLength { expected: usize, found: usize },

    #[error("unexpected character {found:?} in column {col}, expected 'o' or '.'")]
    UnexpectedChar { found: char, col: usize },

    #[error("unexpected line after the last board row")]
    TrailingLine,
}
