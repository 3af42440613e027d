use std::fs::File;
use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::Env;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use bombgrid::config::Args;
use bombgrid::constants::FRAME_MILLIS;
use bombgrid::game::Game;
use bombgrid::input::direction::parse_moves;
use bombgrid::input::{handle_input, Action};
use bombgrid::ui::{renderer::viewport, ui, SpriteAtlas};

fn init_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(args.default_log_filter()));
    if let Some(path) = &args.log_file {
        let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Headless mode: play a fixed move list and print the board after each move.
fn run_script(args: &Args, moves: &str) -> Result<()> {
    let moves = parse_moves(moves)?;
    let mut game = Game::new(args.game_config((0, 0)))?;

    println!("start\n{}", game.board.grid());
    for direction in moves {
        game.shift(direction);
        println!("{}\n{}", direction, game.board.grid());
    }
    println!("detonations: {}", game.detonations);
    Ok(())
}

fn run_tui(terminal: &mut Terminal<CrosstermBackend<Stdout>>, game: &mut Game) -> Result<()> {
    let atlas = SpriteAtlas::builtin();

    loop {
        // Render
        terminal.draw(|f| ui(f, game, &atlas))?;

        // Handle input
        if event::poll(Duration::from_millis(FRAME_MILLIS))? {
            match event::read()? {
                Event::Key(KeyEvent { code, kind, .. }) => {
                    if handle_input(game, code, kind)? == Some(Action::Quit) {
                        break;
                    }
                }
                Event::Resize(columns, rows) => {
                    let (width, height) = viewport(columns, rows);
                    game.update_viewport(width, height);
                }
                _ => {}
            }
        }

        // Advance per-frame effects
        game.update();
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    if let Some(moves) = &args.moves {
        return run_script(&args, moves);
    }

    let (columns, rows) = terminal::size()?;
    let mut game = Game::new(args.game_config(viewport(columns, rows)))?;
    info!("starting on a {}x{} terminal", columns, rows);

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui(&mut terminal, &mut game);

    // Cleanup, even when the loop failed
    let cleanup = restore_terminal(&mut terminal);
    finish(result, cleanup)
}

/// A failed game loop is reported ahead of a failed terminal restore.
fn finish(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let raw = terminal::disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn loop_error_outranks_cleanup_error() {
        let err = finish(Err(anyhow!("draw failed")), Err(anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn cleanup_error_surfaces_after_clean_exit() {
        let err = finish(Ok(()), Err(anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode stuck");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
