pub mod direction;
pub mod handler;

pub use direction::Direction;
pub use handler::{handle_input, Action};
