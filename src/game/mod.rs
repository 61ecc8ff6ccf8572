//! Core puzzle logic: the board, swipe resolution, tile spawning, and the
//! turn-by-turn state machine that ties them together.

mod board;
mod direction;
pub mod resolver;
pub mod spawner;
mod state;

pub use board::{tile_value, Board, Coordinate, MIN_SIZE};
pub use direction::Direction;
pub use resolver::{merge_line, resolve, MoveOutcome};
pub use spawner::RandomSpawner;
pub use state::{GameController, GameState, DEFAULT_SIZE, DEFAULT_WIN_EXPONENT};
