use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::error;
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::countdown::{Countdown, Tick};
use crate::error::GameError;
use crate::game::{Direction, GameController, GameState};
use crate::history::{ScoreHistory, ScoreRecord};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const TICK: Duration = Duration::from_secs(1);

pub struct App {
    config: AppConfig,
    game: GameController,
    countdown: Countdown,
    history: ScoreHistory,
    best_score: u64,
    games_started: u64,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, history: ScoreHistory) -> Result<Self, GameError> {
        let game = new_controller(&config, 0)?;
        let best_score = history.max_score();
        Ok(App {
            countdown: Countdown::new(config.countdown.limit_secs),
            config,
            game,
            history,
            best_score,
            games_started: 1,
            should_quit: false,
            message: None,
        })
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut last_tick = Instant::now();
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            while last_tick.elapsed() >= TICK {
                last_tick += TICK;
                self.on_second();
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('w') => self.swipe(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') => self.swipe(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') => self.swipe(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => self.swipe(Direction::Right),
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    /// One second of wall-clock time has passed
    pub fn on_second(&mut self) {
        if self.countdown.tick() == Tick::Expired {
            self.game.force_lose();
            self.finish();
        }
    }

    fn swipe(&mut self, direction: Direction) {
        if self.game.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        let state = self.game.handle_swipe(direction);
        self.countdown.observe(state);
        if state.is_terminal() {
            self.finish();
        }
    }

    fn restart(&mut self) {
        match new_controller(&self.config, self.games_started) {
            Ok(game) => {
                self.game = game;
                self.games_started += 1;
                self.countdown.reset();
                self.message = Some("New game started!".to_string());
            }
            Err(e) => self.message = Some(format!("Could not start a new game: {e}")),
        }
    }

    /// Record a game that has just reached a terminal state
    fn finish(&mut self) {
        let victory = self.game.state() == GameState::Won;
        let score = self.game.score();
        self.best_score = self.best_score.max(score);
        self.message = Some(if victory {
            "Victory!".to_string()
        } else {
            "You lose!".to_string()
        });

        let record = ScoreRecord::now(score, self.countdown.elapsed(), victory);
        if let Err(e) = self.history.append(record) {
            error!("failed to record score: {e}");
            self.message = Some(format!("Score not saved: {e}"));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

/// Fresh controller for the `games_started`-th game. A configured seed is
/// offset per game so each restart deals a new but reproducible sequence.
fn new_controller(config: &AppConfig, games_started: u64) -> Result<GameController, GameError> {
    let game = &config.game;
    match game.seed {
        Some(seed) => GameController::seeded(
            game.size,
            game.win_exponent,
            seed.wrapping_add(games_started),
        ),
        None => GameController::new(game.size, game.win_exponent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(limit_secs: u64) -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.game.seed = Some(3);
        config.countdown.limit_secs = limit_secs;
        config.history.path = dir.path().join("scores.json");
        let history = ScoreHistory::from_config(&config.history).unwrap();
        let app = App::new(config, history).unwrap();
        (dir, app)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn sweep(app: &mut App) {
        for code in [KeyCode::Left, KeyCode::Up, KeyCode::Right, KeyCode::Down] {
            press(app, code);
        }
    }

    #[test]
    fn test_quit_keys() {
        let (_dir, mut app) = test_app(10);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_first_move_starts_countdown() {
        let (_dir, mut app) = test_app(10);
        assert!(!app.countdown().is_running());
        sweep(&mut app);
        assert!(app.countdown().is_running());
        app.on_second();
        assert_eq!(app.countdown().elapsed(), 1);
    }

    #[test]
    fn test_expiry_forces_loss_and_records() {
        let (_dir, mut app) = test_app(2);
        sweep(&mut app);
        app.on_second();
        assert_eq!(app.game().state(), GameState::Running);
        app.on_second();
        assert_eq!(app.game().state(), GameState::Lost);
        assert_eq!(app.message(), Some("You lose!"));

        let records = app.history().records();
        assert_eq!(records.len(), 1);
        assert!(!records[0].victory);
        assert_eq!(records[0].elapsed_secs, 2);
        assert_eq!(records[0].score, app.game().score());
        assert_eq!(app.best_score(), app.game().score());

        // further input neither moves the board nor records again
        let board = app.game().board().clone();
        sweep(&mut app);
        app.on_second();
        assert_eq!(app.game().board(), &board);
        assert_eq!(app.history().records().len(), 1);
    }

    #[test]
    fn test_restart_builds_a_new_game() {
        let (_dir, mut app) = test_app(1);
        sweep(&mut app);
        app.on_second();
        assert!(app.game().state().is_terminal());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game().state(), GameState::Running);
        assert_eq!(app.game().score(), 0);
        assert_eq!(app.game().board().count_empty(), 15);
        assert_eq!(app.countdown().elapsed(), 0);
        assert!(!app.countdown().is_running());
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_best_score_loaded_from_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let mut history = ScoreHistory::open(&path).unwrap();
        history.append(ScoreRecord::now(512, 30, false)).unwrap();

        let mut config = AppConfig::default();
        config.history.path = path;
        let app = App::new(config, history).unwrap();
        assert_eq!(app.best_score(), 512);
    }
}
