use tracing::{debug, info};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::fen::STARTING_POSITION;
use crate::movegen::legal_moves;
use crate::notation::render;
use crate::types::{Color, Move, Square};

/// One player's session: a board plus the optional side-to-move flag.
///
/// The flag is tracked for the caller's benefit only. Neither `select` nor
/// `play` refuses a piece because it belongs to the other side.
pub struct Game {
    board: Board,
    config: BoardConfig,
    active_color: Option<Color>,
}

impl Game {
    /// Standard starting layout, white to move. Board sizes other than 8 start
    /// empty.
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let board = if config.size == 8 {
            Board::from_fen(STARTING_POSITION, 8)?
        } else {
            Board::new(config.size)?
        };
        info!(size = config.size, "new game");
        Ok(Self {
            board,
            config,
            active_color: Some(Color::White),
        })
    }

    pub fn from_fen(position: &str, config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::from_fen(position, config.size)?;
        info!(position, size = config.size, "game from position");
        Ok(Self {
            board,
            config,
            active_color: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn active_color(&self) -> Option<Color> {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: Option<Color>) {
        self.active_color = color;
    }

    /// Destinations to highlight for the piece on `square`.
    pub fn select(&self, square: Square) -> Result<Vec<Move>> {
        self.board.moves_from(square)
    }

    /// Move the piece on `from` to `to` and return the move in algebraic
    /// notation. `to` must be one of the piece's generated destinations.
    pub fn play(&mut self, from: Square, to: Square) -> Result<String> {
        let piece = *self.board.get(from).ok_or(BoardError::EmptySquare(from))?;
        let mv = legal_moves(&piece, &self.board)?
            .into_iter()
            .find(|m| m.target == to)
            .ok_or(BoardError::IllegalDestination { from, to })?;

        let san = render(&piece, &mv, self.config.size)?;
        self.board.move_piece(from, to)?;
        if let Some(color) = self.active_color {
            self.active_color = Some(color.other_color());
        }
        debug!(%san, "played move");
        Ok(san)
    }

    pub fn fen(&self) -> Result<String> {
        self.board.to_fen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s, 8).unwrap()
    }

    #[test]
    fn test_game() {
        let mut game = Game::new(BoardConfig::default()).unwrap();
        assert_eq!(game.active_color(), Some(Color::White));

        assert_eq!(game.play(sq("e2"), sq("e4")).unwrap(), "e4");
        assert_eq!(game.active_color(), Some(Color::Black));
        assert_eq!(game.play(sq("d7"), sq("d5")).unwrap(), "d5");
        assert_eq!(game.play(sq("e4"), sq("d5")).unwrap(), "exd5");
        assert_eq!(game.play(sq("d8"), sq("d5")).unwrap(), "Qxd5");
        assert_eq!(game.play(sq("b1"), sq("c3")).unwrap(), "Nc3");
        assert_eq!(
            game.fen().unwrap(),
            "rnb1kbnr/ppp1pppp/8/3q4/8/2N5/PPPP1PPP/R1BQKBNR"
        );
    }

    #[test]
    fn test_turn_not_enforced() {
        let mut game = Game::new(BoardConfig::default()).unwrap();
        // black moves first even though the flag says white
        assert_eq!(game.play(sq("g8"), sq("f6")).unwrap(), "Nf6");
        assert_eq!(game.active_color(), Some(Color::Black));
        assert_eq!(game.select(sq("f6")).map(|m| m.len()), Ok(5));
    }

    #[test]
    fn test_illegal_destination() {
        let mut game = Game::new(BoardConfig::default()).unwrap();
        assert_eq!(
            game.play(sq("e2"), sq("e5")),
            Err(BoardError::IllegalDestination {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(
            game.play(sq("e4"), sq("e5")),
            Err(BoardError::EmptySquare(sq("e4")))
        );
        // nothing changed
        assert_eq!(game.fen().unwrap(), STARTING_POSITION);
        assert_eq!(game.active_color(), Some(Color::White));
    }

    #[test]
    fn test_from_fen_has_no_active_color() {
        let mut game = Game::from_fen("8/8/8/8/8/8/8/R3k3", BoardConfig::default()).unwrap();
        assert_eq!(game.active_color(), None);
        assert_eq!(game.play(sq("a1"), sq("e1")).unwrap(), "Rxe1");
        assert_eq!(game.active_color(), None);
        assert_eq!(game.fen().unwrap(), "8/8/8/8/8/8/8/4R3");
    }

    #[test]
    fn test_custom_size() {
        let config = BoardConfig::new(5).unwrap();
        let game = Game::new(config).unwrap();
        assert!(game.board().is_empty());
        assert_eq!(game.fen().unwrap(), "5/5/5/5/5");
        assert!(Game::from_fen(STARTING_POSITION, config).is_err());
    }
}
