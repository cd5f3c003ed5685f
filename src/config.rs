use crate::error::{BoardError, Result};

/// Default number of ranks and files.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Largest supported board; file letters run from `a` to `z`.
pub const MAX_BOARD_SIZE: usize = 26;

/// Environment variable overriding the board size.
pub const BOARD_SIZE_ENV: &str = "CHESSBOARD_SIZE";

/// Board configuration, shared by the codec, the board and the move generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of ranks (and files) of the square board.
    pub size: usize,
}

impl BoardConfig {
    pub fn new(size: usize) -> Result<Self> {
        let config = BoardConfig { size };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the environment, falling back to defaults for
    /// unset or unparsable values.
    pub fn from_env() -> Result<Self> {
        let size = std::env::var(BOARD_SIZE_ENV)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_BOARD_SIZE);
        Self::new(size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidBoardSize(self.size));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}
