use std::fmt;

use crate::error::{BombgridError, Result};
use crate::game::tile::TileKind;

/// A slot coordinate. Row 0 is the top edge, column 0 the left edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pos {
    pub row: usize,
    pub column: usize,
}

impl Pos {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Square, row-major matrix of tile slots. Every mutation of the board goes
/// through `set`/`clear`, so a slot always holds exactly one `TileKind`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<TileKind>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(BombgridError::InvalidGridSize(size));
        }
        Ok(Self {
            size,
            cells: vec![TileKind::Empty; size * size],
        })
    }

    /// Builds a grid from rows of tile symbols (`E H B W C .`).
    /// Returns `None` if the rows are not square or hold an unknown symbol.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut grid = Grid::new(size).ok()?;
        for (row, line) in rows.iter().enumerate() {
            let kinds: Vec<TileKind> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(TileKind::from_symbol)
                .collect::<Option<_>>()?;
            if kinds.len() != size {
                return None;
            }
            for (column, kind) in kinds.into_iter().enumerate() {
                grid.set(Pos::new(row, column), kind);
            }
        }
        Some(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics on a position outside the grid; row-major indexing would
    /// otherwise wrap it onto another slot.
    fn index(&self, pos: Pos) -> usize {
        assert!(self.contains(pos), "{:?} outside {}x{} grid", pos, self.size, self.size);
        pos.row * self.size + pos.column
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.column < self.size
    }

    pub fn get(&self, pos: Pos) -> TileKind {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Pos, kind: TileKind) {
        let i = self.index(pos);
        self.cells[i] = kind;
    }

    pub fn clear(&mut self, pos: Pos) {
        self.set(pos, TileKind::Empty);
    }

    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// The slot one `(row, column)` step away, if it lies inside the grid.
    pub fn neighbor(&self, pos: Pos, delta: (isize, isize)) -> Option<Pos> {
        let row = pos.row.checked_add_signed(delta.0)?;
        let column = pos.column.checked_add_signed(delta.1)?;
        let next = Pos::new(row, column);
        self.contains(next).then_some(next)
    }

    pub fn empty_cells(&self) -> Vec<Pos> {
        self.positions().filter(|&pos| self.is_empty_at(pos)).collect()
    }

    /// Number of non-empty slots.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|kind| !kind.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|kind| !kind.is_empty())
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |column| Pos::new(row, column)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.cells.chunks(self.size)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|kind| kind.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
