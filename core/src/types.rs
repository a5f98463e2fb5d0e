use crate::{BOARD_SIZE, GameError, Result};

/// Single coordinate axis, used for both rows and columns.
pub type Coord = u8;

/// Count type used for mine and cell counts.
pub type CellCount = u8;

/// Board position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Shape of the board array, `(rows, cols)`.
pub const BOARD_DIM: (usize, usize) = (BOARD_SIZE as usize, BOARD_SIZE as usize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds(coords: Coord2) -> bool {
    coords.0 < BOARD_SIZE && coords.1 < BOARD_SIZE
}

pub fn validate_coords(coords: Coord2) -> Result<Coord2> {
    if in_bounds(coords) {
        Ok(coords)
    } else {
        Err(GameError::InvalidCoords)
    }
}

/// Every board position in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
}

/// The up-to-8 positions at Chebyshev distance 1 from `center`, clipped to the board.
pub fn iter_neighbors(center: Coord2) -> NeighborIter {
    NeighborIter::new(center)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn apply_delta((row, col): Coord2, (d_row, d_col): (i8, i8)) -> Option<Coord2> {
    let next = (
        row.checked_add_signed(d_row)?,
        col.checked_add_signed(d_col)?,
    );
    in_bounds(next).then_some(next)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: usize,
}

impl NeighborIter {
    fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(self.index) {
            self.index += 1;
            if let Some(coords) = apply_delta(self.center, delta) {
                return Some(coords);
            }
        }
        None
    }
}
