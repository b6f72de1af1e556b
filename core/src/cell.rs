use serde::{Deserialize, Serialize};

/// What a cell holds, fixed at generation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Empty,
    /// Number of adjacent mines, always in `1..=8`.
    Count(u8),
    Mine,
}

impl Content {
    /// Content for a safe cell with `adjacent` neighboring mines; anything outside `1..=8` is empty.
    pub const fn from_adjacent(adjacent: u8) -> Self {
        match adjacent {
            1..=8 => Self::Count(adjacent),
            _ => Self::Empty,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_numbered(self) -> bool {
        matches!(self, Self::Count(1..=8))
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Empty
    }
}

/// What the player sees of a cell, independent of its content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealStatus {
    Covered,
    Flagged,
    Questioned,
    Revealed,
    /// The mine that ended the game.
    ExplodedMine,
    /// A flag placed on a safe cell, exposed after a loss.
    RevealedNotMine,
}

impl Default for RevealStatus {
    fn default() -> Self {
        Self::Covered
    }
}

/// State of a single grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    content: Content,
    status: RevealStatus,
}

impl Cell {
    pub const RENDER_MINE: u8 = 9;
    pub const RENDER_NOT_MINE: u8 = 10;
    pub const RENDER_EXPLODED: u8 = 11;
    pub const RENDER_QUESTIONED: u8 = 12;
    pub const RENDER_FLAGGED: u8 = 13;
    pub const RENDER_COVERED: u8 = 14;

    pub const fn new(content: Content) -> Self {
        Self {
            content,
            status: RevealStatus::Covered,
        }
    }

    pub const fn content(&self) -> Content {
        self.content
    }

    pub const fn status(&self) -> RevealStatus {
        self.status
    }

    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    pub const fn is_mine(&self) -> bool {
        self.content.is_mine()
    }

    pub const fn is_numbered(&self) -> bool {
        self.content.is_numbered()
    }

    /// Flagged or questioned.
    pub const fn is_marked(&self) -> bool {
        matches!(self.status, RevealStatus::Flagged | RevealStatus::Questioned)
    }

    /// Flagged only; questioned cells do not count towards the mine counter or the win.
    pub const fn is_marked_as_flag(&self) -> bool {
        matches!(self.status, RevealStatus::Flagged)
    }

    pub const fn is_covered(&self) -> bool {
        matches!(
            self.status,
            RevealStatus::Covered | RevealStatus::Flagged | RevealStatus::Questioned
        )
    }

    /// Uncovers the cell. Marked cells ignore this; returns whether the status changed.
    pub fn reveal(&mut self) -> bool {
        if matches!(self.status, RevealStatus::Covered) {
            self.status = RevealStatus::Revealed;
            true
        } else {
            false
        }
    }

    /// Advances the mark cycle `Covered -> Flagged -> Questioned -> Covered`.
    pub fn cycle_mark(&mut self) {
        use RevealStatus::*;

        self.status = match self.status {
            Covered => Flagged,
            Flagged => Questioned,
            Questioned => Covered,
            _ => Flagged,
        };
    }

    pub(crate) fn explode(&mut self) {
        self.status = RevealStatus::ExplodedMine;
    }

    /// Uncovers the cell regardless of marks, used when resolving a loss.
    pub(crate) fn expose(&mut self) {
        if self.is_covered() {
            self.status = RevealStatus::Revealed;
        }
    }

    pub(crate) fn expose_wrong_flag(&mut self) {
        self.status = RevealStatus::RevealedNotMine;
    }

    /// Sprite code for the renderer: `0..=8` for revealed safe cells, then the `RENDER_*` codes.
    pub const fn render_index(&self) -> u8 {
        use RevealStatus::*;

        match (self.status, self.content) {
            (Questioned, _) => Self::RENDER_QUESTIONED,
            (Flagged, _) => Self::RENDER_FLAGGED,
            (Covered, _) => Self::RENDER_COVERED,
            (ExplodedMine, _) => Self::RENDER_EXPLODED,
            (RevealedNotMine, _) => Self::RENDER_NOT_MINE,
            (Revealed, Content::Mine) => Self::RENDER_MINE,
            (Revealed, Content::Count(count)) => count,
            (Revealed, Content::Empty) => 0,
        }
    }
}
