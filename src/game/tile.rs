/// What a grid slot holds. The discriminant is the tile's sprite-atlas index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TileKind {
    Enemy = 0,
    Health = 1,
    Bomb = 2,
    Wall = 3,
    Coin = 4,
    #[default]
    Empty = 5,
}

/// Kinds a spawn may place. Excludes the empty sentinel.
pub const PALETTE: [TileKind; 5] = [
    TileKind::Enemy,
    TileKind::Health,
    TileKind::Bomb,
    TileKind::Wall,
    TileKind::Coin,
];

impl TileKind {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is(self, other: TileKind) -> bool {
        self == other
    }

    pub fn is_empty(self) -> bool {
        self == TileKind::Empty
    }

    /// Merging two volatile tiles primes a detonation.
    pub fn is_volatile(self) -> bool {
        self == TileKind::Bomb
    }

    /// Single-character form used by the text dump of a grid.
    pub fn symbol(self) -> char {
        match self {
            TileKind::Enemy => 'E',
            TileKind::Health => 'H',
            TileKind::Bomb => 'B',
            TileKind::Wall => 'W',
            TileKind::Coin => 'C',
            TileKind::Empty => '.',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(TileKind::Enemy),
            'H' => Some(TileKind::Health),
            'B' => Some(TileKind::Bomb),
            'W' => Some(TileKind::Wall),
            'C' => Some(TileKind::Coin),
            '.' => Some(TileKind::Empty),
            _ => None,
        }
    }
}
