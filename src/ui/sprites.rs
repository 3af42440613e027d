use ratatui::style::Color;

pub const SPRITE_SIZE: usize = 8;

type Pattern = [&'static str; SPRITE_SIZE];

// One pattern per tile kind, in atlas order: enemy, health, bomb, wall, coin, empty.
const PATTERNS: [Pattern; 6] = [
    [
        "..rrrr..",
        ".rrrrrr.",
        "rrwrrwrr",
        "rrkrrkrr",
        "rrrrrrrr",
        "rrkkkkrr",
        ".rrrrrr.",
        "r.r..r.r",
    ],
    [
        "........",
        ".pp..pp.",
        "pPPppppp",
        "pPpppppp",
        "pppppppp",
        ".pppppp.",
        "..pppp..",
        "...pp...",
    ],
    [
        ".....y..",
        "....o...",
        "..kkkk..",
        ".kkkkkk.",
        ".kwkkkk.",
        ".kkkkkk.",
        ".kkkkkk.",
        "..kkkk..",
    ],
    [
        "gggggggg",
        "ssssgsss",
        "ssssgsss",
        "gggggggg",
        "gsssssss",
        "gsssssss",
        "gggggggg",
        "ssssgsss",
    ],
    [
        "........",
        "..yyyy..",
        ".yYyyyy.",
        ".yYyoyy.",
        ".yYyoyy.",
        ".yyyyyy.",
        "..yyyy..",
        "........",
    ],
    [
        "........",
        "........",
        "........",
        "...f....",
        "........",
        "........",
        "......f.",
        "........",
    ],
];

fn palette(c: char) -> Option<Color> {
    let rgb = match c {
        'r' => (0xd0, 0x3a, 0x3a),
        'p' => (0xe8, 0x5a, 0x8a),
        'P' => (0xff, 0xb0, 0xc8),
        'k' => (0x2a, 0x2a, 0x33),
        'w' => (0xf0, 0xf0, 0xf0),
        'o' => (0xf0, 0x8c, 0x28),
        'y' => (0xf2, 0xc8, 0x3c),
        'Y' => (0xff, 0xf0, 0xa0),
        'g' => (0x55, 0x5a, 0x66),
        's' => (0x8a, 0x90, 0x9c),
        'f' => (0x2e, 0x3d, 0x52),
        _ => return None,
    };
    Some(Color::Rgb(rgb.0, rgb.1, rgb.2))
}

/// A square of pixels; `None` is transparent.
#[derive(Clone, Debug)]
pub struct Sprite {
    pixels: [[Option<Color>; SPRITE_SIZE]; SPRITE_SIZE],
}

impl Sprite {
    fn from_pattern(pattern: &Pattern) -> Self {
        let mut pixels = [[None; SPRITE_SIZE]; SPRITE_SIZE];
        for (y, line) in pattern.iter().enumerate() {
            for (x, c) in line.chars().take(SPRITE_SIZE).enumerate() {
                pixels[y][x] = palette(c);
            }
        }
        Self { pixels }
    }

    /// Nearest-neighbour lookup of pixel `(x, y)` when drawn at `size`×`size`.
    pub fn sample(&self, x: u32, y: u32, size: u32) -> Option<Color> {
        if size == 0 || x >= size || y >= size {
            return None;
        }
        let sx = x as usize * SPRITE_SIZE / size as usize;
        let sy = y as usize * SPRITE_SIZE / size as usize;
        self.pixels[sy][sx]
    }
}

/// Sprites keyed by tile-kind index.
#[derive(Clone, Debug)]
pub struct SpriteAtlas {
    sprites: Vec<Sprite>,
}

impl SpriteAtlas {
    pub fn builtin() -> Self {
        Self {
            sprites: PATTERNS.iter().map(Sprite::from_pattern).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Sprite> {
        self.sprites.get(index)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteAtlas {
    fn default() -> Self {
        Self::builtin()
    }
}
