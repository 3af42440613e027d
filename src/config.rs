use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;

use crate::constants::{DEFAULT_GRID_SIZE, DEFAULT_HEALTH, DEFAULT_MAGIC, DEFAULT_SCORE, DEFAULT_TILE_SIZE};
use crate::game::{BoardConfig, Counters, GameConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shift tiles, pair bombs, watch them blow")]
pub struct Args {
    /// Tiles per board edge
    #[arg(long, value_name = "N", default_value_t = DEFAULT_GRID_SIZE,
          value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    pub grid_size: usize,

    /// Edge length of one tile, in half-block pixels
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_TILE_SIZE,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub tile_size: u16,

    /// Starting score shown in the HUD
    #[arg(long, default_value_t = DEFAULT_SCORE)]
    pub score: u32,

    /// Starting health shown in the HUD
    #[arg(long, default_value_t = DEFAULT_HEALTH)]
    pub health: u32,

    /// Starting magic shown in the HUD
    #[arg(long, default_value_t = DEFAULT_MAGIC)]
    pub magic: u32,

    /// Seed for tile spawns and screen shake
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write log records to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Play these moves without a terminal UI and print the board after each,
    /// e.g. "left,up,down" or "LLUR"
    #[arg(long, value_name = "LIST")]
    pub moves: Option<String>,
}

impl Args {
    pub fn game_config(&self, viewport: (u32, u32)) -> GameConfig {
        GameConfig {
            board: BoardConfig {
                tile_size: self.tile_size,
                grid_size: self.grid_size,
                width: viewport.0,
                height: viewport.1,
            },
            counters: Counters {
                score: self.score,
                health: self.health,
                magic: self.magic,
            },
            seed: self.seed,
        }
    }

    /// Default log filter: quiet under the TUI unless a log file was given.
    pub fn default_log_filter(&self) -> &'static str {
        if self.moves.is_some() || self.log_file.is_some() {
            "info"
        } else {
            "off"
        }
    }
}
