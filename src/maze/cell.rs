use std::fmt;

use crate::maze::Direction;

/// Wall state of one cell, one flag per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Walls {
    pub const ALL: Walls = Walls {
        left: true,
        right: true,
        top: true,
        bottom: true,
    };
    pub const NONE: Walls = Walls {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    /// Whether the wall on the given side is present.
    pub fn has(&self, side: Direction) -> bool {
        match side {
            Direction::Down => self.bottom,
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Direction, present: bool) {
        let flag = match side {
            Direction::Down => &mut self.bottom,
            Direction::Up => &mut self.top,
            Direction::Right => &mut self.right,
            Direction::Left => &mut self.left,
        };
        *flag = present;
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

impl fmt::Display for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One letter per standing wall, '-' for an open side: "LRTB", "-R-B", ...
        let sides = [
            (self.left, 'L'),
            (self.right, 'R'),
            (self.top, 'T'),
            (self.bottom, 'B'),
        ];
        for (present, symbol) in sides {
            write!(f, "{}", if present { symbol } else { '-' })?;
        }
        Ok(())
    }
}

/// Placement of the grid on a drawing surface, in pixels.
/// Only renderers look at this; the algorithms never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub origin_x: u32,
    pub origin_y: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            origin_x: 50,
            origin_y: 50,
            cell_width: 50,
            cell_height: 50,
        }
    }
}

impl Layout {
    /// Pixel extents of the cell at row `i`, column `j`.
    /// Returns `None` when any coordinate does not fit in a `u32`.
    pub fn bounds_of(&self, i: usize, j: usize) -> Option<Bounds> {
        let (x1, x2) = span(self.origin_x, self.cell_width, j)?;
        let (y1, y2) = span(self.origin_y, self.cell_height, i)?;
        Some(Bounds { x1, x2, y1, y2 })
    }
}

/// Start and end of the `index`-th segment of length `size` laid out from `origin`.
fn span(origin: u32, size: u32, index: usize) -> Option<(u32, u32)> {
    let start = u32::try_from(index)
        .ok()?
        .checked_mul(size)?
        .checked_add(origin)?;
    Some((start, start.checked_add(size)?))
}

/// Pixel extents of a single cell: `x1..x2` horizontally, `y1..y2` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x1: u32,
    pub x2: u32,
    pub y1: u32,
    pub y2: u32,
}

impl Bounds {
    /// Midpoint of the cell, where path segments start and end.
    pub fn center(&self) -> (u32, u32) {
        let mid = |a: u32, b: u32| ((u64::from(a) + u64::from(b)) / 2) as u32;
        (mid(self.x1, self.x2), mid(self.y1, self.y2))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub walls: Walls,
    /// Scratch flag for traversals. Cleared before every traversal that reads it.
    pub visited: bool,
    bounds: Bounds,
}

impl Cell {
    pub fn new(bounds: Bounds) -> Self {
        Cell {
            walls: Walls::ALL,
            visited: false,
            bounds,
        }
    }

    pub fn has_left_wall(&self) -> bool {
        self.walls.left
    }

    pub fn has_right_wall(&self) -> bool {
        self.walls.right
    }

    pub fn has_top_wall(&self) -> bool {
        self.walls.top
    }

    pub fn has_bottom_wall(&self) -> bool {
        self.walls.bottom
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
