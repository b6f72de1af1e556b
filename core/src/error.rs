use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be at least 1x1")]
    InvalidDimensions,
    #[error("Density divisor must be at least 1")]
    InvalidDensity,
    #[error("Board shape does not fit the coordinate range")]
    InvalidBoardShape,
    #[error("Too many mines, at least one safe cell is required")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
