use serde::{Deserialize, Serialize};

/// One board position as seen by both the engine and the presentation layer.
///
/// `adjacent_mines` is only meaningful for non-mine cells; mine cells keep `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_flagged: bool,
    pub is_revealed: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    pub const fn is_unrevealed(self) -> bool {
        !self.is_revealed
    }

    /// Whether this cell counts as cleared for the win condition.
    pub const fn is_cleared(self) -> bool {
        if self.is_mine {
            self.is_flagged || !self.is_revealed
        } else {
            self.is_revealed
        }
    }

    /// Player-visible glyph: `#` hidden, `F` flagged, `*` revealed mine, `.` revealed zero.
    pub fn glyph(self) -> char {
        match self {
            Self {
                is_revealed: false,
                is_flagged: true,
                ..
            } => 'F',
            Self {
                is_revealed: false,
                ..
            } => '#',
            Self { is_mine: true, .. } => '*',
            Self {
                adjacent_mines: 0, ..
            } => '.',
            Self { adjacent_mines, .. } => char::from(b'0' + adjacent_mines),
        }
    }
}
