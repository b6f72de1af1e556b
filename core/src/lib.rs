#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod reveal;
mod session;
mod types;

/// Board shape and mine density.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `(columns, rows)`
    pub size: Coord2,
    /// Mine count is `floor(columns * rows / density_divisor)`.
    pub density_divisor: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (20, 20);
    pub const DEFAULT_DENSITY_DIVISOR: CellCount = 6;

    pub const fn new_unchecked(size: Coord2, density_divisor: CellCount) -> Self {
        Self {
            size,
            density_divisor,
        }
    }

    pub fn new(size: Coord2, density_divisor: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, density_divisor);
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce a board with at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.density_divisor == 0 {
            return Err(GameError::InvalidDensity);
        }
        if self.mine_count() >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn mine_count(&self) -> CellCount {
        match self.density_divisor {
            0 => 0,
            divisor => self.total_cells() / divisor,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_DENSITY_DIVISOR)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
    /// The mark completed the flag set.
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
            Self::Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
