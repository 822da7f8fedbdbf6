pub mod cell;
pub mod grid;

pub use cell::{Bounds, Cell, Layout, Walls};
pub use grid::Grid;

/// Cell coordinate as `(row, column)`, 0-indexed.
pub type Coord = (usize, usize);

/// Cardinal direction from a cell towards one of its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Fixed order in which neighbors are enumerated everywhere in the crate.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// Step from `coord` in this direction, ignoring the grid's far edges.
    /// Returns `None` when the step would leave the non-negative quadrant.
    pub fn step(self, coord: Coord) -> Option<Coord> {
        let (i, j) = coord;
        match self {
            Direction::Down => Some((i.checked_add(1)?, j)),
            Direction::Up => Some((i.checked_sub(1)?, j)),
            Direction::Right => Some((i, j.checked_add(1)?)),
            Direction::Left => Some((i, j.checked_sub(1)?)),
        }
    }

    /// Direction leading from `from` to the grid-adjacent `to`, if they are adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.step(from) == Some(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_underflow() {
        assert_eq!(Direction::Up.step((0, 3)), None);
        assert_eq!(Direction::Left.step((3, 0)), None);
        assert_eq!(Direction::Down.step((0, 3)), Some((1, 3)));
        assert_eq!(Direction::Right.step((3, 0)), Some((3, 1)));
    }

    #[test]
    fn test_between() {
        assert_eq!(Direction::between((1, 1), (2, 1)), Some(Direction::Down));
        assert_eq!(Direction::between((1, 1), (1, 0)), Some(Direction::Left));
        assert_eq!(Direction::between((1, 1), (2, 2)), None);
        assert_eq!(Direction::between((1, 1), (1, 1)), None);
    }

    #[test]
    fn test_opposite_round_trip() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d, d.opposite().opposite());
        }
    }
}
