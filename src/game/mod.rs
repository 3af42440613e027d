pub mod board;
pub mod grid;
pub mod shift;
pub mod spawn;
pub mod state;
pub mod tile;

pub use board::{Board, BoardConfig};
pub use grid::{Grid, Pos};
pub use state::{Counters, Game, GameConfig};
pub use tile::TileKind;
