use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{DEFAULT_HEALTH, DEFAULT_MAGIC, DEFAULT_SCORE, SHAKE_DAMPER, SHAKE_STRENGTH};
use crate::error::Result;
use crate::game::board::{Board, BoardConfig};
use crate::input::direction::Direction;

/// HUD counters. Shown as configured; nothing in play changes them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Counters {
    pub score: u32,
    pub health: u32,
    pub magic: u32,
}

impl Default for Counters {
    fn default() -> Self {
        Self {
            score: DEFAULT_SCORE,
            health: DEFAULT_HEALTH,
            magic: DEFAULT_MAGIC,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub counters: Counters,
    pub seed: Option<u64>,
}

/// Screen shake kicked off by a detonation and damped every frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Shake {
    pub strength: f32,
    pub damper: f32,
    pub amount: f32,
}

impl Shake {
    pub fn new() -> Self {
        Self {
            strength: 0.0,
            damper: SHAKE_DAMPER,
            amount: 0.0,
        }
    }

    pub fn kick(&mut self) {
        self.strength = SHAKE_STRENGTH;
    }

    /// Picks this frame's offset in `[-strength, strength]`, then decays.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        self.amount = if self.strength > 0.0 {
            rng.gen_range(-self.strength..=self.strength)
        } else {
            0.0
        };
        self.strength = (self.strength - self.damper).max(0.0);
        self.amount
    }
}

pub struct Game {
    pub board: Board,
    pub counters: Counters,
    pub shake: Shake,
    pub detonations: u32,
    pub shifts: u32,
    config: GameConfig,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::with_rng(&config.board, StdRng::seed_from_u64(rng.gen()))?;
        info!(
            "new {}x{} board, tile size {}",
            config.board.grid_size, config.board.grid_size, config.board.tile_size
        );

        Ok(Self {
            board,
            counters: config.counters,
            shake: Shake::new(),
            detonations: 0,
            shifts: 0,
            config,
            rng,
        })
    }

    pub fn shift(&mut self, direction: Direction) {
        let mut primed = 0;
        self.board.shift(direction, |count| primed = count);
        self.shifts += 1;

        if primed > 0 {
            self.detonations += primed as u32;
            self.shake.kick();
            info!("{} detonation(s) on shift {}", primed, self.shifts);
        }
    }

    /// Per-frame tick.
    pub fn update(&mut self) {
        self.shake.tick(&mut self.rng);
    }

    /// Shake offset for the current frame, in canvas pixels.
    pub fn shake_offset(&self) -> i32 {
        self.shake.amount.round() as i32
    }

    pub fn update_viewport(&mut self, width: u32, height: u32) {
        self.config.board.width = width;
        self.config.board.height = height;
        self.board.update_viewport(width, height);
    }

    /// Starts over on a fresh board with the configured counters.
    pub fn reset(&mut self) -> Result<()> {
        let rng = StdRng::seed_from_u64(self.rng.gen());
        self.board = Board::with_rng(&self.config.board, rng)?;
        self.counters = self.config.counters;
        self.shake = Shake::new();
        self.detonations = 0;
        self.shifts = 0;
        info!("session restarted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig {
            board: BoardConfig {
                tile_size: 4,
                grid_size: 4,
                width: 80,
                height: 48,
            },
            counters: Counters {
                score: 5,
                health: 3,
                magic: 1,
            },
            seed: Some(99),
        }
    }

    #[test]
    fn new_game_uses_configured_counters() {
        let game = Game::new(config()).unwrap();
        assert_eq!(game.counters.health, 3);
        assert_eq!(game.board.grid().occupied(), 1);
        assert_eq!(game.shake_offset(), 0);
    }

    #[test]
    fn same_seed_same_board() {
        let a = Game::new(config()).unwrap();
        let b = Game::new(config()).unwrap();
        assert_eq!(a.board.grid(), b.board.grid());
    }

    #[test]
    fn shake_decays_to_rest() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut shake = Shake::new();
        shake.kick();
        for _ in 0..10 {
            let amount = shake.tick(&mut rng);
            assert!(amount.abs() <= SHAKE_STRENGTH);
        }
        assert_eq!(shake.strength, 0.0);
        assert_eq!(shake.tick(&mut rng), 0.0);
    }

    #[test]
    fn shifts_are_counted_and_reset() {
        let mut game = Game::new(config()).unwrap();
        game.shift(Direction::Left);
        game.shift(Direction::Up);
        assert_eq!(game.shifts, 2);
        game.counters.score = 100;

        game.reset().unwrap();
        assert_eq!(game.shifts, 0);
        assert_eq!(game.counters, config().counters);
        assert_eq!(game.board.grid().occupied(), 1);
    }

    #[test]
    fn viewport_survives_reset() {
        let mut game = Game::new(config()).unwrap();
        game.update_viewport(20, 16);
        game.reset().unwrap();
        // 10 - 8 = 2, 8 - 8 = 0
        assert_eq!(game.board.offset(), (2, 0));
    }
}
