use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Places `config.mine_count()` mines uniformly at random, without replacement.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R = SmallRng> {
    rng: R,
}

impl RandomBoardGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self, config: &GameConfig) -> Result<Board> {
        config.validate()?;

        let mut board = Board::new(config.size)?;
        let mine_count = usize::from(config.mine_count());

        let (x_end, y_end) = config.size;
        let mut coords: Vec<Coord2> = (0..x_end)
            .flat_map(|x| (0..y_end).map(move |y| (x, y)))
            .collect();
        let total = coords.len();

        // partial Fisher-Yates: position n takes a pick from the unselected suffix [n, total)
        for n in 0..mine_count {
            let pick = self.rng.random_range(n..total);
            coords.swap(n, pick);
            board.place_mine(coords[n])?;
        }

        board.fill_counts();

        log::debug!(
            "Generated board {:?} with {} mines",
            board.size(),
            board.mine_count()
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_counts_consistent(board: &Board) {
        for (coords, cell) in board.indexed_cells() {
            if cell.is_mine() {
                continue;
            }
            let expected = board
                .iter_neighbors(coords)
                .filter(|&pos| board[pos].is_mine())
                .count() as u8;
            assert_eq!(
                cell.content(),
                Content::from_adjacent(expected),
                "count mismatch at {:?}",
                coords
            );
        }
    }

    #[test]
    fn six_square_gets_six_mines() {
        let config = GameConfig::new((6, 6), 6).unwrap();
        let mut generator = RandomBoardGenerator::from_seed(7);

        let board = generator.generate(&config).unwrap();

        assert_eq!(board.mine_count(), 6);
        assert_eq!(board.cells().filter(|cell| cell.is_mine()).count(), 6);
    }

    #[test]
    fn mine_count_and_adjacency_hold_across_seeds() {
        for size in [1, 5, 9, 20] {
            let config = GameConfig::new((size, size), 6).unwrap();
            for seed in 0..32 {
                let board = RandomBoardGenerator::from_seed(seed)
                    .generate(&config)
                    .unwrap();

                let mines = board.cells().filter(|cell| cell.is_mine()).count();
                assert_eq!(mines, usize::from(config.mine_count()));
                assert_eq!(board.mine_count(), config.mine_count());
                assert_counts_consistent(&board);
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::default();

        let first = RandomBoardGenerator::from_seed(1234)
            .generate(&config)
            .unwrap();
        let second = RandomBoardGenerator::from_seed(1234)
            .generate(&config)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn consecutive_boards_differ() {
        let config = GameConfig::default();
        let mut generator = RandomBoardGenerator::from_seed(99);

        let first = generator.generate(&config).unwrap();
        let second = generator.generate(&config).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn dense_board_leaves_one_safe_cell() {
        let error = GameConfig::new((3, 3), 1).unwrap_err();
        assert_eq!(error, GameError::TooManyMines);

        let config = GameConfig::new((3, 3), 2).unwrap();
        let board = RandomBoardGenerator::from_seed(5)
            .generate(&config)
            .unwrap();
        assert_eq!(board.mine_count(), 4);
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let mut generator = RandomBoardGenerator::from_seed(0);

        let result = generator.generate(&GameConfig::new_unchecked((0, 4), 6));

        assert_eq!(result, Err(GameError::InvalidDimensions));
    }

    #[test]
    fn accepts_caller_supplied_rng() {
        let rng = SmallRng::seed_from_u64(3);
        let mut generator = RandomBoardGenerator::new(rng);

        let board = generator.generate(&GameConfig::new((8, 8), 6).unwrap()).unwrap();

        assert_eq!(board.mine_count(), 10);
    }
}
