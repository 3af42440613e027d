use std::fmt;
use std::str::FromStr;

use crate::error::BombgridError;

/// The edge a shift pushes tiles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Row/column step toward the target edge.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = BombgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            _ => Err(BombgridError::UnknownDirection(s.to_string())),
        }
    }
}

/// Parses a move list such as `"left, up down"` or the compact `"LLUR"`.
pub fn parse_moves(list: &str) -> Result<Vec<Direction>, BombgridError> {
    let words: Vec<&str> = list
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();

    let compact = words.len() == 1 && words[0].parse::<Direction>().is_err();
    if compact {
        return words[0]
            .chars()
            .map(|c| c.to_string().parse())
            .collect();
    }

    words.into_iter().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_letters() {
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("u".parse::<Direction>().unwrap(), Direction::Up);
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn parses_move_lists() {
        assert_eq!(
            parse_moves("left, up down").unwrap(),
            vec![Direction::Left, Direction::Up, Direction::Down]
        );
        assert_eq!(
            parse_moves("LLRU").unwrap(),
            vec![Direction::Left, Direction::Left, Direction::Right, Direction::Up]
        );
        assert_eq!(parse_moves("up").unwrap(), vec![Direction::Up]);
    }

    #[test]
    fn rejects_unknown_moves() {
        match parse_moves("LXR") {
            Err(BombgridError::UnknownDirection(s)) => assert_eq!(s, "X"),
            other => panic!("expected UnknownDirection, got {:?}", other),
        }
    }
}
