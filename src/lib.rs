//! # Tile Slide
//!
//! A sliding-tile puzzle in the style of 2048: tiles on a square grid slide
//! and merge along a swipe direction, the score grows with every merge, a new
//! tile appears after each effective move, and the game ends on reaching the
//! winning tile, on running out of moves, or when the time limit expires.
//!
//! ## Modules
//!
//! - [`game`]: Core puzzle logic: board, swipe resolution, spawning, state machine
//! - [`countdown`]: Per-game time limit counted in one-second ticks
//! - [`history`]: Persistent record of finished games and best score
//! - [`ui`]: Terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod countdown;
pub mod error;
pub mod game;
pub mod history;
pub mod ui;
