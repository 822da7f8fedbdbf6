use std::fmt;

use super::{
    Coord, Direction,
    cell::{Cell, Layout},
};
use crate::error::{MazeError, Result};

/// Rectangular grid of cells stored row-major. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    num_rows: usize,
    num_cols: usize,
    layout: Layout,
}

impl Grid {
    /// Creates a grid where every cell has all four walls and is unvisited.
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self> {
        Grid::with_layout(num_rows, num_cols, Layout::default())
    }

    /// Same as [`Grid::new`], placing cells on a drawing surface according to `layout`.
    pub fn with_layout(num_rows: usize, num_cols: usize, layout: Layout) -> Result<Self> {
        let invalid = move || MazeError::InvalidDimensions { num_rows, num_cols };
        if num_rows == 0 || num_cols == 0 {
            return Err(invalid());
        }
        num_rows.checked_mul(num_cols).ok_or_else(invalid)?;
        // Every cell fits on the drawing surface once the far corner does
        layout
            .bounds_of(num_rows - 1, num_cols - 1)
            .ok_or_else(invalid)?;

        let cells = (0..num_rows)
            .flat_map(|i| (0..num_cols).map(move |j| (i, j)))
            .map(|(i, j)| layout.bounds_of(i, j).map(Cell::new).ok_or_else(invalid))
            .collect::<Result<Vec<_>>>()?
            .into_boxed_slice();
        Ok(Grid {
            cells,
            num_rows,
            num_cols,
            layout,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Entrance cell, top left.
    pub fn entrance(&self) -> Coord {
        (0, 0)
    }

    /// Exit cell, bottom right.
    pub fn exit(&self) -> Coord {
        (self.num_rows - 1, self.num_cols - 1)
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.num_rows && coord.1 < self.num_cols
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 * self.num_cols + coord.1
    }

    fn checked_index(&self, coord: Coord) -> Result<usize> {
        if self.is_in_bounds(coord) {
            Ok(self.ravel_index(coord))
        } else {
            Err(MazeError::OutOfBounds {
                i: coord.0,
                j: coord.1,
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            })
        }
    }

    pub fn cell(&self, i: usize, j: usize) -> Result<&Cell> {
        let idx = self.checked_index((i, j))?;
        Ok(&self.cells[idx])
    }

    pub fn cell_mut(&mut self, i: usize, j: usize) -> Result<&mut Cell> {
        let idx = self.checked_index((i, j))?;
        Ok(&mut self.cells[idx])
    }

    /// All cells with their coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let num_cols = self.num_cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx / num_cols, idx % num_cols), cell))
    }

    /// In-bounds cell one step from `coord` in direction `dir`.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        dir.step(coord).filter(|&c| self.is_in_bounds(c))
    }

    /// Grid-adjacent coordinates of `(i, j)` in the order Down, Up, Right, Left.
    /// Walls are not considered. An out-of-bounds coordinate has no neighbors.
    pub fn neighbors_of(&self, i: usize, j: usize) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors_with_direction((i, j)).map(|(_, c)| c)
    }

    /// Like [`Grid::neighbors_of`], also yielding the direction of each step.
    pub fn neighbors_with_direction(
        &self,
        coord: Coord,
    ) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |d| self.neighbor(coord, d).map(|c| (d, c)))
    }

    /// True when the edge from `coord` towards `dir` leads to a neighbor and neither
    /// side of it records a wall.
    pub fn is_open(&self, coord: Coord, dir: Direction) -> bool {
        if !self.is_in_bounds(coord) {
            return false;
        }
        match self.neighbor(coord, dir) {
            Some(next) => !self[coord].walls.has(dir) && !self[next].walls.has(dir.opposite()),
            None => false,
        }
    }

    /// Whether a wall separates the adjacent cells `a` and `b`, as seen from either side.
    pub fn has_wall_between(&self, a: Coord, b: Coord) -> Result<bool> {
        self.checked_index(a)?;
        self.checked_index(b)?;
        let dir = Direction::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;
        Ok(!self.is_open(a, dir))
    }

    /// Clears the wall shared by the adjacent cells `a` and `b` on both sides at once.
    /// Returns the direction leading from `a` to `b`.
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> Result<Direction> {
        self.checked_index(a)?;
        self.checked_index(b)?;
        let dir = Direction::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;
        self[a].walls.set(dir, false);
        self[b].walls.set(dir.opposite(), false);
        Ok(dir)
    }

    /// Clears every cell's visited flag.
    pub fn reset_visited(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.visited = false);
    }

    /// Number of internal edges open on both sides.
    pub fn open_edge_count(&self) -> usize {
        self.cells()
            .map(|(coord, _)| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter(|&d| self.is_open(coord, d))
                    .count()
            })
            .sum()
    }

    /// Checks that every internal edge has the same wall state on both of its sides.
    pub fn walls_are_symmetric(&self) -> bool {
        self.cells().all(|(coord, cell)| {
            [Direction::Down, Direction::Right].into_iter().all(|d| {
                self.neighbor(coord, d)
                    .is_none_or(|next| cell.walls.has(d) == self[next].walls.has(d.opposite()))
            })
        })
    }

    /// Writes an ASCII diagram of the walls. `cell_body` supplies the three-column
    /// interior of each cell, so callers can mark paths or visited cells.
    pub fn draw<W, F>(&self, out: &mut W, cell_body: F) -> fmt::Result
    where
        W: fmt::Write,
        F: Fn(Coord) -> String,
    {
        let horizontal = |present: bool| if present { "---" } else { "   " };
        let vertical = |present: bool| if present { "|" } else { " " };

        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                write!(out, "+{}", horizontal(self[(i, j)].walls.top))?;
            }
            writeln!(out, "+")?;
            for j in 0..self.num_cols {
                write!(out, "{}{}", vertical(self[(i, j)].walls.left), cell_body((i, j)))?;
            }
            writeln!(out, "{}", vertical(self[(i, self.num_cols - 1)].walls.right))?;
        }
        for j in 0..self.num_cols {
            write!(
                out,
                "+{}",
                horizontal(self[(self.num_rows - 1, j)].walls.bottom)
            )?;
        }
        writeln!(out, "+")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.draw(f, |_| "   ".to_string())
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.cells[idx]
    }
}
