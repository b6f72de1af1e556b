use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-shape grid of cells together with its mine count.
///
/// The shape lives only in the cell array. Deserialized snapshots are checked for a usable shape
/// and get their mine count recomputed from the cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct BoardSnapshot {
    cells: Array2<Cell>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = GameError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        let (dim_x, dim_y) = snapshot.cells.dim();
        let valid_axis = |len: usize| (1..=usize::from(Coord::MAX)).contains(&len);
        if !valid_axis(dim_x) || !valid_axis(dim_y) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut board = Self {
            cells: snapshot.cells,
            mine_count: 0,
        };
        board.mine_count = board.count_mines();
        Ok(board)
    }
}

impl Board {
    /// Blank board: every cell covered and empty, no mines.
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self {
            cells: Array2::default((usize::from(size.0), usize::from(size.1))),
            mine_count: 0,
        })
    }

    /// Board with mines at fixed coordinates and adjacency counts filled in.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size)?;

        for &coords in mine_coords {
            if !board.place_mine(coords)? {
                log::warn!("Mine listed twice at {:?}, placed once", coords);
            }
        }
        if board.mine_count >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }

        board.fill_counts();
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        // both axes are within 1..=Coord::MAX, checked on construction
        let (dim_x, dim_y) = self.cells.dim();
        (dim_x as Coord, dim_y as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (columns, rows) = self.size();
        mult(columns, rows)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (columns, rows) = self.size();
        if coords.0 < columns && coords.1 < rows {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        let coords = self.validate_coords(coords).ok()?;
        Some(&self[coords])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn indexed_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Sets `Mine` content at `coords`, returns `false` if a mine was already there.
    pub fn place_mine(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self[coords];
        if cell.is_mine() {
            return Ok(false);
        }
        cell.set_content(Content::Mine);
        self.mine_count += 1;
        Ok(true)
    }

    /// Number of mines around `coords`.
    ///
    /// The straight-down neighbor `(x, y + 1)` is only counted while `y + 1` is below the
    /// column count; every other neighbor clips against the real bounds. On square boards
    /// this is the plain Moore-neighborhood count.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let (columns, _) = self.size();
        let (x, y) = coords;

        self.iter_neighbors(coords)
            .filter(|&(nx, ny)| !(nx == x && ny > y && ny >= columns))
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    /// Recomputes the mine count and the content of every safe cell from its neighboring mines.
    pub fn fill_counts(&mut self) {
        self.mine_count = self.count_mines();

        let (x_end, y_end) = self.size();
        for x in 0..x_end {
            for y in 0..y_end {
                let coords = (x, y);
                if self[coords].is_mine() {
                    continue;
                }
                let adjacent = self.adjacent_mine_count(coords);
                self[coords].set_content(Content::from_adjacent(adjacent));
            }
        }
    }

    fn count_mines(&self) -> CellCount {
        self.cells().filter(|cell| cell.is_mine()).count() as CellCount
    }

    /// Cells currently carrying a flag; question marks are not counted.
    pub fn flagged_count(&self) -> CellCount {
        self.cells().filter(|cell| cell.is_marked_as_flag()).count() as CellCount
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells().filter(|cell| !cell.is_covered()).count() as CellCount
    }

    pub fn all_mines_flagged(&self) -> bool {
        self.cells()
            .filter(|cell| cell.is_mine())
            .all(|cell| cell.is_marked_as_flag())
    }

    /// Uncovers every mine and exposes flags placed on safe cells.
    pub(crate) fn expose_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.is_mine() {
                cell.expose();
            } else if cell.is_marked_as_flag() {
                cell.expose_wrong_flag();
            }
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (x, y): Coord2) -> &mut Self::Output {
        &mut self.cells[(x as usize, y as usize)]
    }
}
