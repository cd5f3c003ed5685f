pub mod error;
pub mod config;
pub mod types;
pub mod fen;
pub mod board;
pub mod movegen;
pub mod notation;
pub mod game;

pub use board::Board;
pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use game::Game;
pub use movegen::legal_moves;
pub use types::{Color, Move, Piece, PieceType, Square};
