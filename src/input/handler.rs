use crossterm::event::{KeyCode, KeyEventKind};

use crate::error::Result;
use crate::game::Game;
use crate::input::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(Direction),
    Restart,
    Quit,
}

/// Arrow keys and WASD shift; R restarts; Q or Esc quits.
pub fn key_action(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Shift(Direction::Left)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Shift(Direction::Down)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::Shift(Direction::Right)),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Shift(Direction::Up)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Applies one key event to the game. Every press (or auto-repeat) is one
/// shift; releases are ignored. Quitting is left to the caller.
pub fn handle_input(game: &mut Game, key_code: KeyCode, kind: KeyEventKind) -> Result<Option<Action>> {
    if kind == KeyEventKind::Release {
        return Ok(None);
    }

    let action = key_action(key_code);
    match action {
        Some(Action::Shift(direction)) => game.shift(direction),
        Some(Action::Restart) => game.reset()?,
        Some(Action::Quit) | None => {}
    }
    Ok(action)
}
