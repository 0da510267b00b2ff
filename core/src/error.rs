use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board width and height must both be positive")]
    InvalidDimensions,
    #[error("Mine density must be within 0 and 1")]
    InvalidDensity,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board contents are inconsistent with its mine layout")]
    InconsistentBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
