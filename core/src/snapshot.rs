use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned copy of everything the presentation layer needs to draw the board after a command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cells: Array2<Cell>,
    pub mode: GameMode,
    pub game_over: bool,
    pub win: bool,
}

impl BoardSnapshot {
    pub fn from_engine<G: MineGenerator>(engine: &GameEngine<G>) -> Self {
        Self {
            cells: engine.board().clone(),
            mode: engine.mode(),
            game_over: engine.is_game_over(),
            win: engine.is_win(),
        }
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_flags(self.game_over, self.win)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// One line per row, one glyph per cell (see [`Cell::glyph`]).
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity(usize::from(TOTAL_CELLS + BOARD_SIZE));
        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('\n');
            }
            out.extend((0..BOARD_SIZE).map(|col| self.cell_at((row, col)).glyph()));
        }
        out
    }
}
