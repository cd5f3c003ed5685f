//! Algebraic notation for a resolved move.
//!
//! `Nf3`, `Rxe4`, `exd5`. Pieces of the same kind that could reach the same
//! square are not disambiguated.

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::types::{Move, Piece, PieceType, Square};

fn check_squares(squares: [Square; 2], size: usize) -> Result<()> {
    BoardConfig::new(size)?;
    match squares.into_iter().find(|sq| !sq.in_bounds(size)) {
        Some(square) => Err(BoardError::OutOfRangeSquare { square, size }),
        None => Ok(()),
    }
}

/// Render `mv` made by `piece`. `piece.square` must still be the origin, so
/// call this before mutating the board.
pub fn render(piece: &Piece, mv: &Move, size: usize) -> Result<String> {
    check_squares([piece.square, mv.target], size)?;
    let piece_type = piece.piece_type()?;
    let mut san = String::with_capacity(6);

    if piece_type == PieceType::Pawn {
        // departure file on pawn captures: "exd5"
        if mv.capture {
            san.push(piece.square.file_char());
        }
    } else {
        san.push(piece_type.to_char());
    }
    if mv.capture {
        san.push('x');
    }
    san.push_str(&mv.target.to_algebraic(size));
    Ok(san)
}

/// Human readable sentence, e.g. "white knight moves from g1 to f3".
pub fn describe(piece: &Piece, mv: &Move, size: usize) -> Result<String> {
    check_squares([piece.square, mv.target], size)?;
    let maybe_capture_str = if mv.capture { " capturing" } else { "" };
    Ok(format!(
        "{} moves from {} to {}{}",
        piece.to_human()?,
        piece.square.to_algebraic(size),
        mv.target.to_algebraic(size),
        maybe_capture_str
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_piece_moves() {
        let rook = Piece::new('R', Square::new(4, 0));
        let e4 = Square::from_algebraic("e4", 8).unwrap();
        assert_eq!(render(&rook, &Move::capturing(e4), 8).unwrap(), "Rxe4");

        let knight = Piece::new('N', Square::from_algebraic("g1", 8).unwrap());
        let f3 = Square::from_algebraic("f3", 8).unwrap();
        assert_eq!(render(&knight, &Move::quiet(f3), 8).unwrap(), "Nf3");

        // black pieces still use the uppercase letter
        let queen = Piece::new('q', Square::new(0, 3));
        assert_eq!(render(&queen, &Move::quiet(Square::new(4, 7)), 8).unwrap(), "Qh4");
    }

    #[test]
    fn test_render_pawn_moves() {
        let pawn = Piece::new('P', Square::from_algebraic("e4", 8).unwrap());
        let d5 = Square::from_algebraic("d5", 8).unwrap();
        assert_eq!(render(&pawn, &Move::capturing(d5), 8).unwrap(), "exd5");

        let pawn = Piece::new('P', Square::from_algebraic("e2", 8).unwrap());
        let e4 = Square::from_algebraic("e4", 8).unwrap();
        assert_eq!(render(&pawn, &Move::quiet(e4), 8).unwrap(), "e4");
    }

    #[test]
    fn test_render_rank_depends_on_size() {
        let king = Piece::new('K', Square::new(1, 1));
        assert_eq!(render(&king, &Move::quiet(Square::new(0, 0)), 10).unwrap(), "Ka10");
        assert_eq!(render(&king, &Move::quiet(Square::new(0, 0)), 3).unwrap(), "Ka3");
    }

    #[test]
    fn test_render_unsupported_piece() {
        let piece = Piece::new('z', Square::new(0, 0));
        assert_eq!(
            render(&piece, &Move::quiet(Square::new(1, 0)), 8),
            Err(BoardError::UnsupportedPiece('z'))
        );
    }

    #[test]
    fn test_render_rejects_bad_size_and_squares() {
        let king = Piece::new('K', Square::new(1, 1));
        let mv = Move::quiet(Square::new(0, 0));
        assert_eq!(render(&king, &mv, 27), Err(BoardError::InvalidBoardSize(27)));
        assert_eq!(describe(&king, &mv, 0), Err(BoardError::InvalidBoardSize(0)));

        let far = Move::quiet(Square::new(0, 200));
        assert_eq!(
            render(&king, &far, 8),
            Err(BoardError::OutOfRangeSquare {
                square: Square::new(0, 200),
                size: 8
            })
        );
    }

    #[test]
    fn test_describe() {
        let knight = Piece::new('N', Square::from_algebraic("g1", 8).unwrap());
        let f3 = Square::from_algebraic("f3", 8).unwrap();
        assert_eq!(
            describe(&knight, &Move::quiet(f3), 8).unwrap(),
            "white knight moves from g1 to f3"
        );

        let pawn = Piece::new('p', Square::from_algebraic("d5", 8).unwrap());
        let e4 = Square::from_algebraic("e4", 8).unwrap();
        assert_eq!(
            describe(&pawn, &Move::capturing(e4), 8).unwrap(),
            "black pawn moves from d5 to e4 capturing"
        );
    }
}
