//! Delve - Entry Point
//!
//! Parses the command line, initializes logging and the terminal, and runs
//! the game loop.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use delve::data;
use delve::game::{Game, Intent};
use delve::ui::App;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "A small terminal roguelike: collect treasure, fight, survive")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a RON config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Play a move string headlessly (U, D, L, R, Q) and print a summary
    #[arg(long, value_name = "MOVES")]
    replay: Option<String>,

    /// Write the default config file and exit
    #[arg(long)]
    export_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging();
    log::info!("Starting Delve v{}", env!("CARGO_PKG_VERSION"));

    if args.export_config {
        let path = args.config.clone().unwrap_or_else(data::config_path);
        data::export_default_config(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = data::load_config(args.config.as_deref());
    let mut game = Game::new(config, args.seed).context("failed to start a run")?;

    if let Some(moves) = args.replay {
        return run_replay(&mut game, &moves);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_game_loop(&mut terminal, &mut app, &mut game);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    } else {
        println!("Final score: {}", game.score());
    }

    log::info!("Delve shut down cleanly");
    result
}

/// Log to a file so output never lands on the game screen
fn init_logging() {
    let target = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("delve.log")
    {
        Ok(file) => env_logger::Target::Pipe(Box::new(file)),
        Err(_) => env_logger::Target::Pipe(Box::new(io::sink())),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(target)
        .init();
}

/// Main game loop. Blocks on each key press; the game only advances on input.
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    game: &mut Game,
) -> Result<()> {
    let turn_delay = Duration::from_millis(game.config().turn_delay_ms);

    loop {
        terminal.draw(|frame| {
            app.render(frame, game);
        })?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_input(key, game)? {
                break;
            }
            if !game.is_over() {
                std::thread::sleep(turn_delay);
            }
        }
    }

    Ok(())
}

/// Headless run over a move string
fn run_replay(game: &mut Game, moves: &str) -> Result<()> {
    let intents = Intent::parse_sequence(moves)?;
    log::info!("Replaying {} intents", intents.len());

    let mut frames = 0usize;
    let score = game.play(intents, |g| {
        frames += 1;
        log::debug!("Frame {}: player at {:?}, score {}", frames, g.player().pos, g.score());
    })?;

    let player = game.player();
    println!("State:   {:?}", game.state());
    println!("Score:   {}", score);
    println!("Health:  {}/{}", player.health.current, player.health.max);
    println!("Room:    {}/{}", game.current_room() + 1, game.rooms().len());
    println!("Enemies: {}", game.enemies().len());
    println!("Items:   {}", game.items().len());
    Ok(())
}
