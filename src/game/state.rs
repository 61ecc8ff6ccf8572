use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use super::resolver::{self, MoveOutcome};
use super::spawner::{RandomSpawner, HIGH_SPAWN};
use super::{Board, Direction};
use crate::error::GameError;

/// Default edge length.
pub const DEFAULT_SIZE: usize = 4;
/// Default winning exponent (tile 2048).
pub const DEFAULT_WIN_EXPONENT: u8 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameState {
    Running,
    Won,
    Lost,
}

impl GameState {
    /// Won and Lost admit no further transitions
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Running)
    }
}

/// Owns the board and score and sequences every turn.
///
/// A restart is a new controller; nothing here is reset in place.
#[derive(Debug, Clone)]
pub struct GameController<R: Rng = StdRng> {
    board: Board,
    score: u64,
    state: GameState,
    win_exponent: u8,
    spawner: RandomSpawner<R>,
}

impl GameController<StdRng> {
    /// New game on a `size` x `size` board with an OS-seeded spawner
    pub fn new(size: usize, win_exponent: u8) -> Result<Self, GameError> {
        Self::with_spawner(size, win_exponent, RandomSpawner::from_entropy())
    }

    /// New reproducible game
    pub fn seeded(size: usize, win_exponent: u8, seed: u64) -> Result<Self, GameError> {
        Self::with_spawner(size, win_exponent, RandomSpawner::seeded(seed))
    }
}

impl<R: Rng> GameController<R> {
    /// New game: empty board, one spawned tile, score 0, Running.
    pub fn with_spawner(
        size: usize,
        win_exponent: u8,
        mut spawner: RandomSpawner<R>,
    ) -> Result<Self, GameError> {
        validate_win_exponent(win_exponent)?;
        let mut board = Board::new(size)?;
        spawner.spawn(&mut board, 1);
        Ok(GameController {
            board,
            score: 0,
            state: GameState::Running,
            win_exponent,
            spawner,
        })
    }

    /// Start from a prepared board, skipping the opening spawn.
    pub fn with_board(
        board: Board,
        win_exponent: u8,
        spawner: RandomSpawner<R>,
    ) -> Result<Self, GameError> {
        validate_win_exponent(win_exponent)?;
        Ok(GameController {
            board,
            score: 0,
            state: GameState::Running,
            win_exponent,
            spawner,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn win_exponent(&self) -> u8 {
        self.win_exponent
    }

    /// Copy of the grid, one `Vec` per row
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.board.snapshot()
    }

    /// Play one swipe and report the resulting state.
    ///
    /// Terminal controllers ignore input. Otherwise the board is resolved,
    /// a tile is spawned if anything moved, and the win check runs before
    /// the loss check.
    pub fn handle_swipe(&mut self, direction: Direction) -> GameState {
        if self.state.is_terminal() {
            return self.state;
        }

        let MoveOutcome {
            board,
            score_gained,
            changed,
        } = resolver::resolve(direction, &self.board);
        self.score = self.score.saturating_add(score_gained);
        self.board = board;
        debug!(
            "swipe {}: gained {}, changed {}",
            direction.name(),
            score_gained,
            changed
        );

        if changed {
            self.spawner.spawn(&mut self.board, 1);
        }

        if self.board.contains(self.win_exponent) {
            self.enter(GameState::Won);
        } else if !changed && self.board.count_empty() == 0 && !self.board.has_adjacent_pair() {
            self.enter(GameState::Lost);
        }
        self.state
    }

    /// End a running game as lost regardless of the board. No-op once terminal.
    pub fn force_lose(&mut self) {
        if self.state == GameState::Running {
            self.enter(GameState::Lost);
        }
    }

    fn enter(&mut self, state: GameState) {
        info!("game {:?} with score {}", state, self.score);
        self.state = state;
    }
}

fn validate_win_exponent(win_exponent: u8) -> Result<(), GameError> {
    if win_exponent <= HIGH_SPAWN {
        return Err(GameError::WinExponentTooLow {
            win_exponent,
            max_spawn: HIGH_SPAWN,
        });
    }
    Ok(())
}
