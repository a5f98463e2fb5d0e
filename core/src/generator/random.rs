use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement without replacement: draw a random cell, redraw if it already holds a mine.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomMineGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self) -> MineLayout {
        let mut mine_mask: Array2<bool> = Array2::default(BOARD_DIM);
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;

        while mines_placed < MINE_COUNT {
            let coords: Coord2 = (
                self.rng.random_range(0..BOARD_SIZE),
                self.rng.random_range(0..BOARD_SIZE),
            );
            draws += 1;

            let slot = &mut mine_mask[coords.to_nd_index()];
            if !*slot {
                *slot = true;
                mines_placed += 1;
            }
        }

        if draws > u32::from(MINE_COUNT) {
            log::trace!("mine placement needed {draws} draws for {MINE_COUNT} mines");
        }

        MineLayout::from_mine_mask(mine_mask)
    }
}
