use thiserror::Error;

/// Errors raised when a board or session is built from bad input.
#[derive(Error, Debug)]
pub enum BombgridError {
    #[error("grid dimension must be at least 1, got {0}")]
    InvalidGridSize(usize),

    #[error("tile size must be at least 1, got {0}")]
    InvalidTileSize(u16),

    #[error("grid is {found}x{found} but the board expects {expected}x{expected}")]
    GridSizeMismatch { expected: usize, found: usize },

    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, BombgridError>;
