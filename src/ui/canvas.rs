use std::ops::Range;

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::ui::sprites::SpriteAtlas;
use crate::ui::Surface;

/// Pixel buffer shown on a terminal with upper-half blocks: each terminal
/// cell carries two stacked pixels, so canvas pixels come out square.
pub struct PixelCanvas<'a> {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    origin: (i32, i32),
    atlas: &'a SpriteAtlas,
}

impl<'a> PixelCanvas<'a> {
    pub fn new(width: u32, height: u32, atlas: &'a SpriteAtlas) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::Reset; (width * height) as usize],
            origin: (0, 0),
            atlas,
        }
    }

    /// Canvas sized to cover a terminal area.
    pub fn for_area(area: Rect, atlas: &'a SpriteAtlas) -> Self {
        Self::new(area.width as u32, area.height as u32 * 2, atlas)
    }

    /// Shifts every later draw call by `(dx, dy)`.
    pub fn set_origin(&mut self, dx: i32, dy: i32) {
        self.origin = (dx, dy);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width && y < self.height).then(|| self.pixels[(y * self.width + x) as usize])
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        let x = x + self.origin.0;
        let y = y + self.origin.1;
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = (y as u32 * self.width + x as u32) as usize;
        self.pixels[i] = color;
    }

    /// Offsets into a `width`×`height` block at `(x, y)` that land on the canvas.
    fn visible(&self, x: i32, y: i32, width: u32, height: u32) -> (Range<u32>, Range<u32>) {
        (
            clip(x as i64 + self.origin.0 as i64, width, self.width),
            clip(y as i64 + self.origin.1 as i64, height, self.height),
        )
    }
}

fn clip(start: i64, len: u32, limit: u32) -> Range<u32> {
    let first = (-start).clamp(0, len as i64);
    let end = (limit as i64 - start).clamp(first, len as i64);
    first as u32..end as u32
}

impl Surface for PixelCanvas<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let (columns, rows) = self.visible(x, y, width, height);
        for dy in rows {
            for dx in columns.clone() {
                self.put(x + dx as i32, y + dy as i32, color);
            }
        }
    }

    fn draw_sprite(&mut self, sprite: usize, x: i32, y: i32, size: u32) {
        let atlas = self.atlas;
        let Some(sprite) = atlas.get(sprite) else {
            return;
        };
        let (columns, rows) = self.visible(x, y, size, size);
        for dy in rows {
            for dx in columns.clone() {
                if let Some(color) = sprite.sample(dx, dy, size) {
                    self.put(x + dx as i32, y + dy as i32, color);
                }
            }
        }
    }
}

impl Widget for &PixelCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = area.height.min(((self.height + 1) / 2) as u16);
        let columns = area.width.min(self.width as u16);

        for row in 0..rows {
            for column in 0..columns {
                let top = self.pixel(column as u32, row as u32 * 2).unwrap_or(Color::Reset);
                let bottom = self.pixel(column as u32, row as u32 * 2 + 1).unwrap_or(Color::Reset);
                buf.get_mut(area.x + column, area.y + row)
                    .set_char('▀')
                    .set_fg(top)
                    .set_bg(bottom);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::Rgb(255, 0, 0);

    #[test]
    fn fill_clips_to_canvas() {
        let atlas = SpriteAtlas::builtin();
        let mut canvas = PixelCanvas::new(4, 4, &atlas);
        canvas.fill_rect(-2, -2, 4, 4, RED);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some(Color::Reset));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn oversized_draws_only_touch_visible_pixels() {
        let atlas = SpriteAtlas::builtin();
        let mut canvas = PixelCanvas::new(80, 78, &atlas);

        // A 40x40 board of 2000-pixel tiles, far larger than the canvas.
        canvas.fill_rect(-40_000, -40_000, 80_000, 80_000, RED);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(79, 77), Some(RED));

        canvas.set_origin(3, -5);
        canvas.draw_sprite(3, -1_000, -1_000, 2_000);
        let wall = atlas.get(3).unwrap();
        assert_eq!(canvas.pixel(0, 0), wall.sample(997, 1_005, 2_000));
        assert_eq!(canvas.pixel(79, 77), wall.sample(1_076, 1_082, 2_000));

        canvas.fill_rect(i32::MAX - 10, 0, u32::MAX, u32::MAX, Color::Reset);
        canvas.fill_rect(100, 100, 80_000, 80_000, Color::Reset);
        assert_eq!(canvas.pixel(79, 77), wall.sample(1_076, 1_082, 2_000));
    }

    #[test]
    fn origin_translates_draws() {
        let atlas = SpriteAtlas::builtin();
        let mut canvas = PixelCanvas::new(4, 4, &atlas);
        canvas.set_origin(1, 2);
        canvas.fill_rect(0, 0, 1, 1, RED);
        assert_eq!(canvas.pixel(1, 2), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color::Reset));
    }

    #[test]
    fn sprite_is_drawn_from_atlas() {
        let atlas = SpriteAtlas::builtin();
        let mut canvas = PixelCanvas::new(8, 8, &atlas);
        // Wall pattern has no transparent pixels.
        canvas.draw_sprite(3, 0, 0, 8);
        let wall = atlas.get(3).unwrap();
        assert_eq!(canvas.pixel(0, 1), wall.sample(0, 1, 8));
        assert_ne!(canvas.pixel(7, 7), Some(Color::Reset));
    }

    #[test]
    fn unknown_sprite_draws_nothing() {
        let atlas = SpriteAtlas::builtin();
        let mut canvas = PixelCanvas::new(2, 2, &atlas);
        canvas.draw_sprite(42, 0, 0, 2);
        assert_eq!(canvas.pixel(0, 0), Some(Color::Reset));
    }

    #[test]
    fn widget_packs_two_pixels_per_cell() {
        let atlas = SpriteAtlas::builtin();
        let mut canvas = PixelCanvas::new(2, 4, &atlas);
        canvas.fill_rect(0, 0, 1, 1, RED);

        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        (&canvas).render(area, &mut buf);

        let cell = buf.get(0, 0);
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, RED);
        assert_eq!(cell.bg, Color::Reset);
    }
}
