use alloc::collections::VecDeque;

use crate::*;

/// Flood-fill reveal over a borrowed board.
///
/// A cell joins the fill only while it is covered, unmarked and safe, and it is uncovered the
/// moment it joins, so its status doubles as the visited marker. Numbered cells are uncovered
/// but never expanded, which bounds the fill by the numbered border of the empty region.
#[derive(Debug)]
pub struct RevealEngine<'a> {
    board: &'a mut Board,
    revealed: CellCount,
    expanded: CellCount,
}

impl<'a> RevealEngine<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            revealed: 0,
            expanded: 0,
        }
    }

    /// Cells uncovered by this engine so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed
    }

    /// Empty cells whose neighbors were inspected by this engine so far.
    pub fn expanded_count(&self) -> CellCount {
        self.expanded
    }

    /// Reveals the cell at `coords`, flooding out from it when it is empty.
    ///
    /// Marked cells and out-of-range coordinates are left alone. A covered mine explodes and
    /// nothing else changes; resolving the loss is up to the caller.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Ok(coords) = self.board.validate_coords(coords) else {
            log::trace!("Reveal outside the board at {:?}", coords);
            return RevealOutcome::NoChange;
        };

        let cell = self.board[coords];
        if cell.is_marked() {
            log::trace!("Skipping marked cell at {:?}", coords);
            return RevealOutcome::NoChange;
        }

        if cell.is_mine() {
            if !cell.is_covered() {
                return RevealOutcome::NoChange;
            }
            self.board[coords].explode();
            log::debug!("Mine exploded at {:?}", coords);
            return RevealOutcome::HitMine;
        }

        let before = self.revealed;
        if self.board[coords].reveal() {
            self.revealed += 1;
        }
        if !cell.is_numbered() {
            self.flood_from(coords);
        }

        if self.revealed > before {
            RevealOutcome::Revealed
        } else {
            RevealOutcome::NoChange
        }
    }

    fn flood_from(&mut self, start: Coord2) {
        let mut to_expand = VecDeque::from([start]);
        log::trace!("Starting flood-fill from {:?}", start);

        while let Some(expand_coords) = to_expand.pop_front() {
            self.expanded += 1;

            for neighbor in self.board.iter_neighbors(expand_coords) {
                let next = &mut self.board[neighbor];
                if next.is_mine() || !next.reveal() {
                    continue;
                }
                self.revealed += 1;
                log::trace!("Flood opened cell at {:?}", neighbor);

                if !next.is_numbered() {
                    to_expand.push_back(neighbor);
                }
            }
        }
    }
}
