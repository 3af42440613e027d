// Board defaults
pub const DEFAULT_GRID_SIZE: usize = 6;
pub const DEFAULT_TILE_SIZE: u16 = 8; // Canvas pixels per tile edge

// HUD counters shown at startup
pub const DEFAULT_SCORE: u32 = 0;
pub const DEFAULT_HEALTH: u32 = 10;
pub const DEFAULT_MAGIC: u32 = 0;

// Camera shake (canvas pixels, per frame)
pub const SHAKE_STRENGTH: f32 = 10.0;
pub const SHAKE_DAMPER: f32 = 1.0;

pub const FRAME_MILLIS: u64 = 16; // Input poll / frame period
pub const HUD_HEIGHT: u16 = 3;    // Terminal rows reserved below the board

pub const BOARD_BACKGROUND: (u8, u8, u8) = (0x20, 0x2c, 0x3d);
