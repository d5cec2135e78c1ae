//! Grid coordinates and the eight line directions

use super::board::{COLS, ROWS};
use std::fmt;

/// A (row, column) cell position on the board
///
/// Equality is by value, so coordinates double as map and set keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate lies inside the `ROWS × COLS` grid
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Move one cell in `direction`, or `None` when that leaves the grid
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Self::new(row, col);
        next.in_bounds().then_some(next)
    }

    /// The `len` cells starting here and heading in `direction`
    ///
    /// Returns `None` if any of those cells falls outside the grid.
    #[must_use]
    pub fn ray(self, direction: Direction, len: usize) -> Option<Vec<Self>> {
        if !self.in_bounds() {
            return None;
        }

        let mut cells = Vec::with_capacity(len);
        let mut current = self;
        for i in 0..len {
            if i > 0 {
                current = current.step(direction)?;
            }
            cells.push(current);
        }
        Some(cells)
    }

    /// Sign of the row and column difference going from `self` to `other`
    ///
    /// Each component is -1, 0 or 1. Step size is ignored.
    #[inline]
    #[must_use]
    pub fn sign_towards(self, other: Self) -> (i8, i8) {
        (signum(self.row, other.row), signum(self.col, other.col))
    }

    /// Check whether `other` is one of the eight neighbours of `self`
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr != 0 || dc != 0)
    }
}

const fn signum(from: usize, to: usize) -> i8 {
    if to > from {
        1
    } else if to < from {
        -1
    } else {
        0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight straight-line directions a word can run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Row and column offset of a single step
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Short compass label ("N", "NE", ...)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_inside_grid() {
        let c = Coordinate::new(5, 5);
        assert_eq!(c.step(Direction::North), Some(Coordinate::new(4, 5)));
        assert_eq!(c.step(Direction::SouthWest), Some(Coordinate::new(6, 4)));
        assert_eq!(c.step(Direction::East), Some(Coordinate::new(5, 6)));
    }

    #[test]
    fn step_off_the_edge() {
        assert_eq!(Coordinate::new(0, 0).step(Direction::North), None);
        assert_eq!(Coordinate::new(0, 0).step(Direction::West), None);
        assert_eq!(Coordinate::new(ROWS - 1, 3).step(Direction::South), None);
        assert_eq!(Coordinate::new(3, COLS - 1).step(Direction::NorthEast), None);
    }

    #[test]
    fn ray_collects_cells() {
        let cells = Coordinate::new(2, 2).ray(Direction::SouthEast, 3).unwrap();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(2, 2),
                Coordinate::new(3, 3),
                Coordinate::new(4, 4)
            ]
        );
    }

    #[test]
    fn ray_rejects_overflow() {
        assert!(Coordinate::new(0, 8).ray(Direction::East, 3).is_none());
        assert!(Coordinate::new(0, 7).ray(Direction::East, 3).is_some());
        assert!(Coordinate::new(ROWS, 0).ray(Direction::East, 1).is_none());
    }

    #[test]
    fn sign_ignores_distance() {
        let origin = Coordinate::new(4, 4);
        assert_eq!(origin.sign_towards(Coordinate::new(4, 9)), (0, 1));
        assert_eq!(origin.sign_towards(Coordinate::new(0, 0)), (-1, -1));
        assert_eq!(origin.sign_towards(Coordinate::new(7, 2)), (1, -1));
        assert_eq!(origin.sign_towards(origin), (0, 0));
    }

    #[test]
    fn adjacency() {
        let c = Coordinate::new(3, 3);
        assert!(c.is_adjacent(Coordinate::new(2, 2)));
        assert!(c.is_adjacent(Coordinate::new(4, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coordinate::new(3, 5)));
    }

    #[test]
    fn directions_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }
}
