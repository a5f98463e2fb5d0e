use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("More than one mine placed on the same cell")]
    DuplicateMine,
    #[error("Expected {expected} mines, got {actual}")]
    WrongMineCount {
        expected: CellCount,
        actual: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
