use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Ready,
    Active,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

/// One game at a time: owns the board and routes every action through it.
///
/// The game is won once every mine carries a flag, whether or not the safe cells have been
/// uncovered. Once won or lost, only [`GameSession::reset`] and [`GameSession::restart`] change
/// the board.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomBoardGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    state: SessionState,
    exploded_at: Option<Coord2>,
    /// Flags on the board when the mine went off, before loss resolution uncovered them.
    flags_at_loss: Option<CellCount>,
}

impl GameSession<RandomBoardGenerator> {
    /// Session with randomly generated boards, seeded so the sequence of boards is reproducible.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomBoardGenerator::from_seed(seed))
    }
}

impl<G: BoardGenerator> GameSession<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = generator.generate(&config)?;
        Ok(Self {
            config,
            generator,
            board,
            state: Default::default(),
            exploded_at: None,
            flags_at_loss: None,
        })
    }

    /// Discards the board and starts over with `config`.
    ///
    /// On error the current game is left untouched.
    pub fn reset(&mut self, config: GameConfig) -> Result<()> {
        let board = self.generator.generate(&config)?;
        log::debug!(
            "Reset to {:?} with {} mines",
            config.size,
            board.mine_count()
        );
        self.config = config;
        self.board = board;
        self.state = SessionState::Ready;
        self.exploded_at = None;
        self.flags_at_loss = None;
        Ok(())
    }

    /// Starts over with the current config.
    pub fn restart(&mut self) -> Result<()> {
        self.reset(self.config)
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(coords) = self.accept_action(coords) else {
            return RevealOutcome::NoChange;
        };

        let outcome = RevealEngine::new(&mut self.board).reveal(coords);
        match outcome {
            RevealOutcome::HitMine => {
                self.exploded_at = Some(coords);
                self.end_game(false);
                RevealOutcome::HitMine
            }
            _ if self.check_won() => RevealOutcome::Won,
            _ => outcome,
        }
    }

    pub fn cycle_mark(&mut self, coords: Coord2) -> MarkOutcome {
        let Some(coords) = self.accept_action(coords) else {
            return MarkOutcome::NoChange;
        };

        let cell = &mut self.board[coords];
        if !cell.is_covered() {
            log::trace!("Ignoring mark on revealed cell at {:?}", coords);
            return MarkOutcome::NoChange;
        }
        cell.cycle_mark();

        if self.check_won() {
            MarkOutcome::Won
        } else {
            MarkOutcome::Changed
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn has_started(&self) -> bool {
        !self.state.is_ready()
    }

    pub fn is_game_won(&self) -> bool {
        matches!(self.state, SessionState::Won)
    }

    pub fn is_game_lost(&self) -> bool {
        matches!(self.state, SessionState::Lost)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines minus flags; negative when more cells are flagged than there are mines.
    ///
    /// After a loss the flags are uncovered, so the count stays at its value from the moment
    /// the mine went off.
    pub fn bombs_remaining(&self) -> isize {
        let flagged = self
            .flags_at_loss
            .unwrap_or_else(|| self.board.flagged_count());
        (self.board.mine_count() as isize) - (flagged as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.board.cell(coords).copied()
    }

    pub fn render_index(&self, coords: Coord2) -> Option<u8> {
        self.board.cell(coords).map(Cell::render_index)
    }

    pub fn exploded_at(&self) -> Option<Coord2> {
        self.exploded_at
    }

    /// Bounds-checks an action and records the start of play; `None` means the action is ignored.
    fn accept_action(&mut self, coords: Coord2) -> Option<Coord2> {
        let Ok(coords) = self.board.validate_coords(coords) else {
            log::trace!("Ignoring action outside the board at {:?}", coords);
            return None;
        };

        self.mark_started();
        if self.state.is_finished() {
            log::trace!("Game already ended, ignoring action at {:?}", coords);
            return None;
        }
        Some(coords)
    }

    fn check_won(&mut self) -> bool {
        if self.board.all_mines_flagged() {
            self.end_game(true);
            true
        } else {
            false
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, SessionState::Ready) {
            self.state = SessionState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        if won {
            self.state = SessionState::Won;
            log::debug!("Game won, all {} mines flagged", self.board.mine_count());
        } else {
            self.state = SessionState::Lost;
            self.flags_at_loss = Some(self.board.flagged_count());
            self.board.expose_mines();
            log::debug!("Game lost at {:?}", self.exploded_at);
        }
    }
}
