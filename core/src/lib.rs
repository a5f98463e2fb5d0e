use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

/// Width and height of the board.
pub const BOARD_SIZE: Coord = 5;

/// Mines placed on every board.
pub const MINE_COUNT: CellCount = 3;

pub const TOTAL_CELLS: CellCount = BOARD_SIZE * BOARD_SIZE;

pub const SAFE_CELLS: CellCount = TOTAL_CELLS - MINE_COUNT;

/// Where the mines of one game are, independent of what the player has uncovered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
}

impl MineLayout {
    /// Callers guarantee a `BOARD_DIM` mask holding exactly `MINE_COUNT` mines.
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        debug_assert_eq!(mine_mask.dim(), BOARD_DIM);
        Self { mine_mask }
    }

    pub fn from_mine_coords(mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(BOARD_DIM);

        for &coords in mine_coords {
            let slot = &mut mine_mask[validate_coords(coords)?.to_nd_index()];
            if *slot {
                return Err(GameError::DuplicateMine);
            }
            *slot = true;
        }

        let actual = mine_coords.len();
        if actual != usize::from(MINE_COUNT) {
            return Err(GameError::WrongMineCount {
                expected: MINE_COUNT,
                actual: actual.try_into().unwrap_or(CellCount::MAX),
            });
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn mine_count(&self) -> CellCount {
        iter_coords().filter(|&coords| self[coords]).count() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        TOTAL_CELLS - self.mine_count()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mine positions in row-major order.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        iter_coords().filter(|&coords| self[coords]).collect()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// What a single click did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Revealed,
    Flagged,
    Unflagged,
    HitMine,
    Won,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}
