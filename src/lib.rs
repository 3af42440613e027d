//! A tile-shifting puzzle for the terminal.
//!
//! The board slides every tile one step toward an edge per move, collapses
//! neighbouring tiles of the same kind, and detonates paired bombs together
//! with their four neighbours. One random tile spawns after every move.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

pub use error::{BombgridError, Result};
pub use game::{Board, BoardConfig, Game, GameConfig, Grid, Pos, TileKind};
pub use input::Direction;
