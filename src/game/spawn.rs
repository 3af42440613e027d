use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::grid::{Grid, Pos};
use crate::game::tile::{TileKind, PALETTE};

/// Places one random palette tile on a random empty slot.
/// A full grid is left untouched and `None` is returned.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<(Pos, TileKind)> {
    let empty = grid.empty_cells();
    let Some(&pos) = empty.choose(rng) else {
        debug!("grid full, skipping spawn");
        return None;
    };
    let kind = *PALETTE.choose(rng)?;

    grid.set(pos, kind);
    debug!("spawned {:?} at ({}, {})", kind, pos.row, pos.column);
    Some((pos, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fills_exactly_one_empty_slot() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(4).unwrap();
        let (pos, kind) = spawn_tile(&mut grid, &mut rng).unwrap();
        assert_eq!(grid.occupied(), 1);
        assert_eq!(grid.get(pos), kind);
        assert!(!kind.is_empty());
    }

    #[test]
    fn only_empty_slots_are_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = Grid::from_rows(&["WWW", "W.W", "WWW"]).unwrap();
        let (pos, _) = spawn_tile(&mut grid, &mut rng).unwrap();
        assert_eq!(pos, Pos::new(1, 1));
        assert!(grid.is_full());
    }

    #[test]
    fn full_grid_is_left_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::from_rows(&["EH", "BC"]).unwrap();
        let before = grid.clone();
        assert_eq!(spawn_tile(&mut grid, &mut rng), None);
        assert_eq!(grid, before);
    }
}
