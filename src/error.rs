use thiserror::Error;

use crate::types::Square;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("malformed position string: {reason}")]
    MalformedPosition { reason: String },

    #[error("unsupported piece letter `{0}`")]
    UnsupportedPiece(char),

    #[error("square {square} is outside a {size}x{size} board")]
    OutOfRangeSquare { square: Square, size: usize },

    #[error("invalid board size {0}, expected 1..=26")]
    InvalidBoardSize(usize),

    #[error("invalid square notation `{0}`")]
    InvalidSquare(String),

    #[error("no piece on square {0}")]
    EmptySquare(Square),

    #[error("piece on {from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },
}

impl BoardError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        BoardError::MalformedPosition {
            reason: reason.into(),
        }
    }
}
