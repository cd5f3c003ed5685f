//! Destination squares for a single piece.
//!
//! The rule set is permissive: moves that leave the own king in check are not
//! removed, and castling, en passant and promotion do not exist.

use tracing::trace;

use crate::board::Board;
use crate::error::Result;
use crate::types::{Color, Move, Piece, PieceType, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// up, down, left, right
const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All destinations of `piece` on `board`.
///
/// Fails with `UnsupportedPiece` if the piece letter is not one of the six
/// kinds. A piece that cannot move yields an empty list.
pub fn legal_moves(piece: &Piece, board: &Board) -> Result<Vec<Move>> {
    MoveGenerator::new(board, piece).collect()
}

/// Outcome of looking at one candidate square.
enum PotentialMove {
    /// Admissible destination, with its capture flag
    Valid(bool),
    /// Occupied by a piece of the mover's color
    Invalid,
}

impl PotentialMove {
    fn continue_search_in_direction(&self) -> bool {
        matches!(self, PotentialMove::Valid(false))
    }
}

pub struct MoveGenerator<'a> {
    board: &'a Board,
    piece: &'a Piece,
    color: Color,
    moves: Vec<Move>,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a Board, piece: &'a Piece) -> Self {
        Self {
            board,
            piece,
            color: piece.color(),
            moves: Vec::new(),
        }
    }

    pub fn collect(&mut self) -> Result<Vec<Move>> {
        let piece_type = self.piece.piece_type()?;
        match piece_type {
            PieceType::King => self.generate_leaper_moves(&KING_OFFSETS),
            PieceType::Knight => self.generate_leaper_moves(&KNIGHT_OFFSETS),
            PieceType::Rook => self.generate_ray_moves(&ROOK_DIRECTIONS),
            PieceType::Bishop => self.generate_ray_moves(&BISHOP_DIRECTIONS),
            PieceType::Queen => {
                self.generate_ray_moves(&ROOK_DIRECTIONS);
                self.generate_ray_moves(&BISHOP_DIRECTIONS);
            }
            PieceType::Pawn => self.generate_pawn_moves(),
        }
        trace!(
            letter = %self.piece.letter,
            square = %self.piece.square,
            count = self.moves.len(),
            "generated moves"
        );
        Ok(std::mem::take(&mut self.moves))
    }

    fn size(&self) -> usize {
        self.board.size()
    }

    // An in-bounds square is admissible unless a piece of our own color sits
    // there; the capture flag only records occupancy.
    fn check_move_target(&self, candidate: Square) -> PotentialMove {
        match self.board.color_at(candidate) {
            Some(color) if color == self.color => PotentialMove::Invalid,
            _ => PotentialMove::Valid(self.board.has(candidate)),
        }
    }

    fn generate_leaper_moves(&mut self, offsets: &[(isize, isize)]) {
        let origin = self.piece.square;
        for &(dr, dc) in offsets {
            let Some(candidate) = origin.offset(dr, dc, self.size()) else {
                continue;
            };
            if let PotentialMove::Valid(capture) = self.check_move_target(candidate) {
                self.moves.push(Move::new(candidate, capture));
            }
        }
    }

    /// Each direction is walked nearest square first until it leaves the
    /// board, meets an own piece (excluded) or an opposing piece (included as
    /// a capture). No ray is longer than the board.
    fn generate_ray_moves(&mut self, directions: &[(isize, isize)]) {
        let origin = self.piece.square;
        let size = self.size();
        for &(dr, dc) in directions {
            for distance in 1..=size as isize {
                let Some(candidate) = origin.offset(dr * distance, dc * distance, size) else {
                    break;
                };
                let potential_move = self.check_move_target(candidate);
                match potential_move {
                    PotentialMove::Invalid => break,
                    PotentialMove::Valid(capture) => {
                        self.moves.push(Move::new(candidate, capture));
                        if !potential_move.continue_search_in_direction() {
                            break;
                        }
                    }
                }
            }
        }
    }

    fn generate_pawn_moves(&mut self) {
        let origin = self.piece.square;
        let size = self.size();
        let forward = pawn_step_forward(self.color);

        // pushes never capture
        if let Some(one_step) = origin.offset(forward, 0, size) {
            if !self.board.has(one_step) {
                self.moves.push(Move::quiet(one_step));

                if Some(origin.row) == pawn_starting_row(self.color, size) {
                    if let Some(two_step) = origin.offset(2 * forward, 0, size) {
                        if !self.board.has(two_step) {
                            self.moves.push(Move::quiet(two_step));
                        }
                    }
                }
            }
        }

        // diagonals only when an opposing piece is there
        for dc in [-1, 1] {
            if let Some(candidate) = origin.offset(forward, dc, size) {
                if self.board.color_at(candidate) == Some(self.color.other_color()) {
                    self.moves.push(Move::capturing(candidate));
                }
            }
        }
    }
}

/// Row delta of a pawn push. White starts at the bottom and moves up.
fn pawn_step_forward(color: Color) -> isize {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row from which a pawn of the given color may advance two squares
fn pawn_starting_row(color: Color, size: usize) -> Option<usize> {
    match color {
        Color::White => size.checked_sub(2),
        Color::Black => Some(1),
    }
}
