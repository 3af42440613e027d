pub mod canvas;
pub mod renderer;
pub mod sprites;

use ratatui::style::Color;

/// A drawing target for the board's render hook. Coordinates are canvas
/// pixels and may fall outside the surface; implementations clip.
pub trait Surface {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);

    /// Draws atlas entry `sprite` scaled to a `size`×`size` square.
    fn draw_sprite(&mut self, sprite: usize, x: i32, y: i32, size: u32);
}

pub use canvas::PixelCanvas;
pub use renderer::ui;
pub use sprites::SpriteAtlas;
