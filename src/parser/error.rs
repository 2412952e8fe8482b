use std::fmt;
use thiserror::Error;

/// The record the parser was reading when it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    PlateSize,
    PlateVertex { index: usize, of: usize },
    PieceCount,
    PieceSize { piece: usize },
    PieceVertex { piece: usize, index: usize, of: usize },
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::PlateSize => write!(f, "plate vertex count"),
            Record::PlateVertex { index, of } => {
                write!(f, "plate vertex {} of {}", index + 1, of)
            }
            Record::PieceCount => write!(f, "piece count"),
            Record::PieceSize { piece } => write!(f, "vertex count of piece {}", piece + 1),
            Record::PieceVertex { piece, index, of } => {
                write!(f, "vertex {} of {} of piece {}", index + 1, of, piece + 1)
            }
        }
    }
}

/// Errors produced while reading a layout file
#[derive(Debug, Error)]
pub enum ParseError {
    /// A line did not hold the number(s) its record requires
    #[error("line {line}: expected {expected} for {record}, found {found:?}")]
    Format {
        line: usize,
        record: Record,
        expected: &'static str,
        found: String,
    },

    /// The input ran out before every declared record was read
    #[error("input ended after {lines} lines while reading {record}")]
    Truncated { lines: usize, record: Record },

    #[error("failed to read layout input")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub fn is_format(&self) -> bool {
        matches!(self, ParseError::Format { .. })
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, ParseError::Truncated { .. })
    }
}
