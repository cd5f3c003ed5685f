use std::fmt;

use crate::error::{BoardError, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Uppercase letters are white, everything else is black.
    pub fn from_case(c: char) -> Color {
        if c.is_uppercase() {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn other_color(&self) -> Color {
        if *self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn to_human(&self) -> &str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    pub fn from_char(c: char) -> Result<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Ok(PieceType::Pawn),
            'r' => Ok(PieceType::Rook),
            'n' => Ok(PieceType::Knight),
            'b' => Ok(PieceType::Bishop),
            'q' => Ok(PieceType::Queen),
            'k' => Ok(PieceType::King),
            _ => Err(BoardError::UnsupportedPiece(c)),
        }
    }

    pub fn to_human(&self) -> &str {
        match self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// A board coordinate. Row 0 is the first rank written in a position string,
/// column 0 the leftmost file.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Square {
        Square { row, col }
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The square `(row + dr, col + dc)`, or `None` if it falls off a board of
    /// the given size.
    pub fn offset(&self, dr: isize, dc: isize, size: usize) -> Option<Square> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let square = Square { row, col };
        square.in_bounds(size).then_some(square)
    }

    /// File letter, `a` for column 0. Columns past `z` print as `?`.
    pub fn file_char(&self) -> char {
        match u8::try_from(self.col) {
            Ok(col) if col < 26 => (b'a' + col) as char,
            _ => '?',
        }
    }

    /// Rank number as printed in algebraic notation; row 0 is the highest rank.
    pub fn rank_number(&self, size: usize) -> usize {
        size - self.row
    }

    pub fn to_algebraic(&self, size: usize) -> String {
        format!("{}{}", self.file_char(), self.rank_number(size))
    }

    pub fn from_algebraic(s: &str, size: usize) -> Result<Square> {
        let bad_square = |s: &str| BoardError::InvalidSquare(s.to_string());

        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(|| bad_square(s))?;
        if !file_char.is_ascii_lowercase() {
            return Err(bad_square(s));
        }
        let rank: usize = chars.as_str().parse().map_err(|_| bad_square(s))?;
        let col = (file_char as u8 - b'a') as usize;
        if rank == 0 || rank > size || col >= size {
            return Err(bad_square(s));
        }
        Ok(Square {
            row: size - rank,
            col,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece on the board. Only the letter is stored; color and type are derived
/// from it so they can never disagree.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Piece {
    pub letter: char,
    pub square: Square,
    /// Square the piece stood on when the position was loaded.
    pub start: Square,
}

impl Piece {
    pub fn new(letter: char, square: Square) -> Piece {
        Piece {
            letter,
            square,
            start: square,
        }
    }

    pub fn color(&self) -> Color {
        Color::from_case(self.letter)
    }

    pub fn piece_type(&self) -> Result<PieceType> {
        PieceType::from_char(self.letter)
    }

    pub fn has_moved(&self) -> bool {
        self.square != self.start
    }

    pub fn to_symbol(&self) -> &str {
        let is_white = self.color() == Color::White;
        match self.piece_type() {
            Ok(PieceType::Pawn) => {
                if is_white {
                    "♙"
                } else {
                    "♟︎"
                }
            }
            Ok(PieceType::Rook) => {
                if is_white {
                    "♖"
                } else {
                    "♜"
                }
            }
            Ok(PieceType::Knight) => {
                if is_white {
                    "♘"
                } else {
                    "♞"
                }
            }
            Ok(PieceType::Bishop) => {
                if is_white {
                    "♗"
                } else {
                    "♝"
                }
            }
            Ok(PieceType::Queen) => {
                if is_white {
                    "♕"
                } else {
                    "♛"
                }
            }
            Ok(PieceType::King) => {
                if is_white {
                    "♔"
                } else {
                    "♚"
                }
            }
            Err(_) => "?",
        }
    }

    /// "white knight", "black pawn", ...
    pub fn to_human(&self) -> Result<String> {
        Ok(format!(
            "{} {}",
            self.color().to_human(),
            self.piece_type()?.to_human()
        ))
    }
}

/// A destination for the selected piece. `capture` is set when the target was
/// occupied at generation time.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Move {
    pub target: Square,
    pub capture: bool,
}

impl Move {
    pub fn new(target: Square, capture: bool) -> Self {
        Self { target, capture }
    }

    pub fn quiet(target: Square) -> Self {
        Self::new(target, false)
    }

    pub fn capturing(target: Square) -> Self {
        Self::new(target, true)
    }
}
