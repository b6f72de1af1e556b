/// Single coordinate axis used for board columns, rows, and positions.
pub type Coord = u8;

/// Count type used for mine counts, total-cell counts, and the density divisor.
pub type CellCount = u16;

/// Two-dimensional coordinates `(column, row)`, zero-based.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

/// Moore neighborhood of a cell, clipped to the board bounds.
///
/// Walks the 3x3 block around the center row by row and skips the center itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    step: u8,
}

impl NeighborIter {
    const CENTER_STEP: u8 = 4;
    const STEPS: u8 = 9;

    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            step: 0,
        }
    }

    fn offset(axis: Coord, delta: u8, bound: Coord) -> Option<Coord> {
        let shifted = (u16::from(axis) + u16::from(delta)).checked_sub(1)?;
        (shifted < u16::from(bound)).then_some(shifted as Coord)
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.step < Self::STEPS {
            let step = self.step;
            self.step += 1;
            if step == Self::CENTER_STEP {
                continue;
            }

            let (x, y) = self.center;
            let (columns, rows) = self.bounds;
            let neighbor = Self::offset(x, step % 3, columns)
                .zip(Self::offset(y, step / 3, rows));
            if neighbor.is_some() {
                return neighbor;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn far_edge_is_clipped() {
        let neighbors: Vec<_> = NeighborIter::new((254, 0), (255, 2)).collect();

        assert_eq!(neighbors, [(253, 0), (253, 1), (254, 1)]);
    }

    #[test]
    fn mult_widens_to_cell_count() {
        assert_eq!(mult(6, 6), 36);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
