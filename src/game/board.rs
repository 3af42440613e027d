use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::style::Color;

use crate::constants::{BOARD_BACKGROUND, DEFAULT_GRID_SIZE, DEFAULT_TILE_SIZE};
use crate::error::{BombgridError, Result};
use crate::game::grid::{Grid, Pos};
use crate::game::shift;
use crate::game::spawn::spawn_tile;
use crate::input::direction::Direction;
use crate::ui::Surface;

/// Construction parameters for a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoardConfig {
    pub tile_size: u16,
    pub grid_size: usize,
    pub width: u32,
    pub height: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            width: 0,
            height: 0,
        }
    }
}

impl BoardConfig {
    fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(BombgridError::InvalidGridSize(self.grid_size));
        }
        if self.tile_size == 0 {
            return Err(BombgridError::InvalidTileSize(self.tile_size));
        }
        Ok(())
    }
}

pub struct Board {
    grid: Grid,
    detonations: Vec<Pos>,
    tile_size: u16,
    offset: (i32, i32),
    rng: StdRng,
}

impl Board {
    pub fn new(config: &BoardConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Empty board seeded with a single random tile.
    pub fn with_rng(config: &BoardConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let mut board = Self::from_grid(config, Grid::new(config.grid_size)?, rng)?;
        board.add_tile();
        Ok(board)
    }

    /// Restores a prepared layout exactly as given; nothing is spawned.
    pub fn from_grid(config: &BoardConfig, grid: Grid, rng: StdRng) -> Result<Self> {
        config.validate()?;
        if grid.size() != config.grid_size {
            return Err(BombgridError::GridSizeMismatch {
                expected: config.grid_size,
                found: grid.size(),
            });
        }

        let mut board = Self {
            grid,
            detonations: Vec::new(),
            tile_size: config.tile_size,
            offset: (0, 0),
            rng,
        };
        board.update_viewport(config.width, config.height);
        Ok(board)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Top-left corner of the board inside the viewport.
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    /// Edge length of the whole board in viewport units.
    pub fn extent(&self) -> u32 {
        self.tile_size as u32 * self.grid.size() as u32
    }

    /// One move: directional pass, detonation cascade, then a single spawn.
    /// `on_detonation` receives the number of primed sites and is only
    /// called when there was at least one.
    pub fn shift<F: FnOnce(usize)>(&mut self, direction: Direction, on_detonation: F) {
        shift::slide(&mut self.grid, direction, &mut self.detonations);

        let primed = self.detonations.len();
        let removed = shift::detonate(&mut self.grid, &mut self.detonations);
        debug!("shift {}: {} primed, {} removed", direction, primed, removed);
        if primed > 0 {
            on_detonation(primed);
        }

        self.add_tile();
    }

    fn add_tile(&mut self) {
        spawn_tile(&mut self.grid, &mut self.rng);
    }

    /// Recentres the board; the grid itself keeps its size.
    pub fn update_viewport(&mut self, width: u32, height: u32) {
        let extent = self.extent() as f64;
        self.offset = (center(width as f64, extent), center(height as f64, extent));
        info!("viewport {}x{}, board offset {:?}", width, height, self.offset);
    }

    /// Paints the board background and every slot's sprite.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (left, top) = self.offset;
        let (r, g, b) = BOARD_BACKGROUND;
        surface.fill_rect(left, top, self.extent(), self.extent(), Color::Rgb(r, g, b));

        let tile = self.tile_size as i32;
        for pos in self.grid.positions() {
            let x = left + pos.column as i32 * tile;
            let y = top + pos.row as i32 * tile;
            surface.draw_sprite(self.grid.get(pos).index(), x, y, tile as u32);
        }
    }
}

// Half-up rounding, so -2.5 centres to -2 rather than -3.
fn center(span: f64, extent: f64) -> i32 {
    (span / 2.0 - extent / 2.0 + 0.5).floor() as i32
}
