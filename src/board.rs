use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::fen::{self, STARTING_POSITION};
use crate::movegen::legal_moves;
use crate::types::{Color, Move, Piece, Square};

/// Occupancy map from square to piece.
///
/// The board knows nothing about chess rules; it only answers what stands
/// where. Callers mutate it after a move has been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: HashMap<Square, Piece>,
}

impl Board {
    /// An empty board. Fails with `InvalidBoardSize` outside `1..=26`.
    pub fn new(size: usize) -> Result<Board> {
        Board::with_config(&BoardConfig { size })
    }

    pub fn with_config(config: &BoardConfig) -> Result<Board> {
        config.validate()?;
        Ok(Board {
            size: config.size,
            squares: HashMap::new(),
        })
    }

    pub fn from_fen(position: &str, size: usize) -> Result<Board> {
        let mut board = Board::new(size)?;
        for placed in fen::decode(position, size)? {
            let (letter, square) = placed?;
            board.squares.insert(square, Piece::new(letter, square));
        }
        debug!(pieces = board.len(), size, "loaded board");
        Ok(board)
    }

    pub fn starting_position() -> Result<Board> {
        Board::from_fen(STARTING_POSITION, 8)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.squares.get(&square)
    }

    pub fn has(&self, square: Square) -> bool {
        self.squares.contains_key(&square)
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|p| p.color())
    }

    /// Put `piece` on `square`, returning whatever stood there before. The
    /// piece's own `square` is rewritten to match its key.
    pub fn set(&mut self, square: Square, mut piece: Piece) -> Result<Option<Piece>> {
        if !square.in_bounds(self.size) {
            return Err(BoardError::OutOfRangeSquare {
                square,
                size: self.size,
            });
        }
        piece.square = square;
        Ok(self.squares.insert(square, piece))
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares.remove(&square)
    }

    /// Move whatever stands on `from` to `to`, returning the captured piece.
    ///
    /// No rule checking happens here; use the move generator first.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>> {
        if !to.in_bounds(self.size) {
            return Err(BoardError::OutOfRangeSquare {
                square: to,
                size: self.size,
            });
        }
        let piece = self.remove(from).ok_or(BoardError::EmptySquare(from))?;
        let captured = self.set(to, piece)?;
        debug!(
            letter = %piece.letter,
            from = %from,
            to = %to,
            capture = captured.is_some(),
            "moved piece"
        );
        Ok(captured)
    }

    /// Moves for the piece standing on `square`; empty when the square is.
    pub fn moves_from(&self, square: Square) -> Result<Vec<Move>> {
        match self.get(square) {
            Some(piece) => legal_moves(piece, self),
            None => Ok(Vec::new()),
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.values()
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn to_fen(&self) -> Result<String> {
        fen::encode(self.pieces().map(|p| (p.letter, p.square)), self.size)
    }

    /// Diagram of the board, row 0 on top.
    pub fn draw_board(&self) -> String {
        let mut string = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.get(Square::new(row, col)) {
                    Some(p) => p.to_symbol(),
                    None => ".",
                };
                string.push(' ');
                string.push_str(symbol);
            }
            string.push('\n');
        }
        string
    }

    /// Diagram of the destinations of the piece on `square`: `O` for a quiet
    /// move, `X` for a capture.
    pub fn draw_moves(&self, square: Square) -> Result<String> {
        let moves = self.moves_from(square)?;
        let mut string = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let here = Square::new(row, col);
                let symbol = if here == square {
                    self.get(here).map_or(".", |p| p.to_symbol())
                } else {
                    match moves.iter().find(|m| m.target == here) {
                        Some(m) if m.capture => "X",
                        Some(_) => "O",
                        None => ".",
                    }
                };
                string.push(' ');
                string.push_str(symbol);
            }
            string.push('\n');
        }
        Ok(string)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.draw_board())
    }
}
