//! Terminal UI: plays the puzzle with arrow keys or WASD, shows score, best
//! score and remaining time, and records finished games.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
