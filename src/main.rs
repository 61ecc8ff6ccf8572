use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::Env;
use ratatui::{backend::CrosstermBackend, Terminal};
use tile_slide::config::AppConfig;
use tile_slide::history::ScoreHistory;
use tile_slide::ui::App;

/// Play the sliding-tile puzzle in the terminal.
#[derive(Parser)]
#[command(name = "tile-slide", about = "Slide and merge tiles to reach 2048")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board edge length
    #[arg(long)]
    size: Option<usize>,

    /// Override the winning tile exponent (11 = 2048)
    #[arg(long)]
    win_exponent: Option<u8>,

    /// Seed the tile spawner for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Override the score history file
    #[arg(long)]
    history: Option<PathBuf>,

    /// Override the per-game time limit in seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        app_config.game.size = size;
    }
    if let Some(win_exponent) = cli.win_exponent {
        app_config.game.win_exponent = win_exponent;
    }
    if cli.seed.is_some() {
        app_config.game.seed = cli.seed;
    }
    if let Some(history) = cli.history {
        app_config.history.path = history;
    }
    if let Some(limit) = cli.time_limit {
        app_config.countdown.limit_secs = limit;
    }
    app_config.validate().context("invalid configuration")?;

    let history = ScoreHistory::from_config(&app_config.history).with_context(|| {
        format!(
            "opening score history {}",
            app_config.history.path.display()
        )
    })?;
    let mut app = App::new(app_config, history).context("starting game")?;

    run(&mut app).context("terminal UI failed")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even when the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
