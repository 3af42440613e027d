//! The shift engine: one directional pass over the grid followed by the
//! detonation cascade.
//!
//! All four directions run the same pass. A direction only changes the
//! neighbour offset and the order cells are visited in, which is expressed as
//! a coordinate transform of `(line, step)` where `step` is the distance from
//! the target edge.

use crate::game::grid::{Grid, Pos};
use crate::input::direction::Direction;

/// Maps a lane index and a distance from the target edge onto a grid slot.
fn slot(direction: Direction, line: usize, step: usize, size: usize) -> Pos {
    match direction {
        Direction::Left => Pos::new(line, step),
        Direction::Right => Pos::new(line, size - 1 - step),
        Direction::Up => Pos::new(step, line),
        Direction::Down => Pos::new(size - 1 - step, line),
    }
}

/// Visit order for a pass. Within a lane, slots nearer the target edge come
/// first, so a cell is only compared against a neighbour already settled in
/// this pass. The edge slot itself (step 0) never moves and is skipped.
pub fn scan_order(direction: Direction, size: usize) -> impl Iterator<Item = Pos> {
    (0..size).flat_map(move |line| (1..size).map(move |step| slot(direction, line, step, size)))
}

/// Runs one directional pass. Tiles slide one slot into empty space; a tile
/// that meets its own kind collapses into it. Volatile merges record the
/// landing slot in `detonations`.
pub fn slide(grid: &mut Grid, direction: Direction, detonations: &mut Vec<Pos>) {
    let delta = direction.delta();

    for pos in scan_order(direction, grid.size()) {
        let kind = grid.get(pos);
        if kind.is_empty() {
            continue;
        }
        let Some(target) = grid.neighbor(pos, delta) else {
            continue;
        };

        let landing = grid.get(target);
        if landing.is_empty() {
            grid.set(target, kind);
            grid.clear(pos);
        } else if landing.is(kind) {
            if kind.is_volatile() {
                detonations.push(target);
            }
            grid.clear(pos);
        }
    }
}

const BLAST: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Empties every primed site and its four neighbours, in the order the sites
/// were recorded, against the live grid. Neighbouring bombs are removed, not
/// set off. Drains `detonations` and returns how many tiles were removed.
pub fn detonate(grid: &mut Grid, detonations: &mut Vec<Pos>) -> usize {
    let mut removed = 0;

    for site in detonations.drain(..) {
        if !grid.is_empty_at(site) {
            removed += 1;
        }
        grid.clear(site);

        for delta in BLAST {
            if let Some(pos) = grid.neighbor(site, delta) {
                if !grid.is_empty_at(pos) {
                    grid.clear(pos);
                    removed += 1;
                }
            }
        }
    }

    removed
}
