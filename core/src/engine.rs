use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

/// How a click on an unrevealed cell is interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    TryField,
    PlaceFlag,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::TryField
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn from_flags(game_over: bool, win: bool) -> Self {
        match (game_over, win) {
            (_, true) => Self::Won,
            (true, false) => Self::Lost,
            (false, false) => Self::Playing,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// State machine for one 5x5 game session: `Playing -> {Won, Lost}`, with `reset` starting over.
#[derive(Clone, Debug)]
pub struct GameEngine<G = RandomMineGenerator> {
    generator: G,
    mine_layout: MineLayout,
    board: Array2<Cell>,
    mode: GameMode,
    game_over: bool,
    win: bool,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_generator(RandomMineGenerator::from_entropy())
    }

    /// Every layout of the session, including those after `reset`, follows from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(RandomMineGenerator::new(seed))
    }

    /// Starts on `layout`; later resets place mines randomly.
    pub fn from_layout(layout: MineLayout) -> Self {
        Self::with_layout(RandomMineGenerator::from_entropy(), layout)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MineGenerator> GameEngine<G> {
    pub fn with_generator(mut generator: G) -> Self {
        let layout = generator.generate();
        Self::with_layout(generator, layout)
    }

    fn with_layout(generator: G, layout: MineLayout) -> Self {
        log::debug!("new game, mines at {:?}", layout.mine_coords());
        Self {
            generator,
            board: build_board(&layout),
            mine_layout: layout,
            mode: GameMode::default(),
            game_over: false,
            win: false,
        }
    }

    /// Throws away the current game and starts a new one on a freshly generated layout.
    ///
    /// The current mode carries over.
    pub fn reset(&mut self) {
        let layout = self.generator.generate();
        self.start(layout);
    }

    pub fn reset_with_layout(&mut self, layout: MineLayout) {
        self.start(layout);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::debug!("mode changed to {mode:?}");
        }
        self.mode = mode;
    }

    /// Applies a tap on `(row, col)` in the current mode.
    ///
    /// Coordinates come from the board's own bounds, so an out-of-range
    /// position is a caller bug and panics. Use [`Self::try_cell_click`]
    /// for unchecked input.
    pub fn on_cell_clicked(&mut self, row: Coord, col: Coord) -> ClickOutcome {
        assert!(
            in_bounds((row, col)),
            "cell ({row}, {col}) is outside the {BOARD_SIZE}x{BOARD_SIZE} board"
        );
        self.click((row, col))
    }

    pub fn try_cell_click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = validate_coords(coords)?;
        Ok(self.click(coords))
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_win(&self) -> bool {
        self.win
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_flags(self.game_over, self.win)
    }

    pub fn board(&self) -> &Array2<Cell> {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords.to_nd_index()]
    }

    pub fn cell_at_checked(&self, coords: Coord2) -> Result<Cell> {
        validate_coords(coords).map(|coords| self.cell_at(coords))
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Revealed non-mine cells.
    pub fn revealed_count(&self) -> CellCount {
        self.board
            .iter()
            .filter(|cell| cell.is_revealed && !cell.is_mine)
            .count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.board.iter().filter(|cell| cell.is_flagged).count() as CellCount
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> i16 {
        i16::from(self.mine_layout.mine_count()) - i16::from(self.flagged_count())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_engine(self)
    }

    fn start(&mut self, layout: MineLayout) {
        log::debug!("new game, mines at {:?}", layout.mine_coords());
        self.board = build_board(&layout);
        self.mine_layout = layout;
        self.game_over = false;
        self.win = false;
    }

    fn click(&mut self, coords: Coord2) -> ClickOutcome {
        if self.game_over || self.cell_at(coords).is_revealed {
            return ClickOutcome::NoChange;
        }

        match self.mode {
            GameMode::TryField => self.try_field(coords),
            GameMode::PlaceFlag => self.toggle_flag(coords),
        }
    }

    fn try_field(&mut self, coords: Coord2) -> ClickOutcome {
        if self.mine_layout.contains_mine(coords) {
            self.game_over = true;
            self.reveal_all_mines();
            log::info!("stepped on the mine at {coords:?}, game lost");
            return ClickOutcome::HitMine;
        }

        let revealed = self.flood_reveal(coords);
        log::debug!("revealed {revealed} cells from {coords:?}");

        if self.check_win() {
            self.win = true;
            self.game_over = true;
            log::info!("all safe cells revealed, game won");
            ClickOutcome::Won
        } else {
            ClickOutcome::Revealed
        }
    }

    fn toggle_flag(&mut self, coords: Coord2) -> ClickOutcome {
        let cell = &mut self.board[coords.to_nd_index()];
        if cell.is_revealed {
            return ClickOutcome::NoChange;
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            ClickOutcome::Flagged
        } else {
            ClickOutcome::Unflagged
        }
    }

    /// Reveals `origin` and spreads through every 8-connected zero cell, stopping at numbered cells.
    fn flood_reveal(&mut self, origin: Coord2) -> usize {
        let mut revealed = 0;
        let mut to_visit = VecDeque::from([origin]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.board[coords.to_nd_index()];
            if cell.is_revealed {
                continue;
            }
            debug_assert!(!cell.is_mine, "flood reached mine at {coords:?}");

            cell.is_revealed = true;
            revealed += 1;

            if cell.adjacent_mines == 0 {
                let board = &self.board;
                to_visit.extend(
                    iter_neighbors(coords).filter(|&pos| !board[pos.to_nd_index()].is_revealed),
                );
            }
        }

        revealed
    }

    fn reveal_all_mines(&mut self) {
        for cell in self.board.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
        }
    }

    fn check_win(&self) -> bool {
        self.board.iter().all(|&cell| cell.is_cleared())
    }
}

fn build_board(layout: &MineLayout) -> Array2<Cell> {
    let mut board: Array2<Cell> = Array2::default(BOARD_DIM);

    for coords in iter_coords() {
        let cell = &mut board[coords.to_nd_index()];
        if layout.contains_mine(coords) {
            cell.is_mine = true;
        } else {
            cell.adjacent_mines = layout.adjacent_mine_count(coords);
        }
    }

    board
}
