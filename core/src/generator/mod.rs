use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Source of fresh boards for a session.
pub trait BoardGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board>;
}

/// Always produces the same layout, regardless of the density in the config.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetGenerator {
    mines: Vec<Coord2>,
}

impl PresetGenerator {
    pub fn new(mines: Vec<Coord2>) -> Self {
        Self { mines }
    }
}

impl BoardGenerator for PresetGenerator {
    fn generate(&mut self, config: &GameConfig) -> Result<Board> {
        let board = Board::from_mine_coords(config.size, &self.mines)?;
        log::debug!(
            "Preset board {:?} with {} mines",
            board.size(),
            board.mine_count()
        );
        Ok(board)
    }
}
