use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts, asked for a new one on every reset.
pub trait MineGenerator {
    fn generate(&mut self) -> MineLayout;
}

/// A fixed layout replays the same mines on every reset.
impl MineGenerator for MineLayout {
    fn generate(&mut self) -> MineLayout {
        self.clone()
    }
}
