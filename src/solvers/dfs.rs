use crate::{
    error::Result,
    events::{StepEvent, StepSink},
    maze::{Coord, Direction, Grid},
};

/// A cell on the current search path and the directions it has not tried yet.
struct Frame {
    cell: Coord,
    next_dir: usize,
}

impl Frame {
    fn new(cell: Coord) -> Self {
        Frame { cell, next_dir: 0 }
    }

    /// Next untried neighbor that is unvisited and not walled off from this cell.
    /// Visited status is checked lazily, as a sibling branch may have reached the
    /// neighbor since this frame was entered.
    fn next_candidate(&mut self, grid: &Grid) -> Option<Coord> {
        while let Some(&dir) = Direction::ALL.get(self.next_dir) {
            self.next_dir += 1;
            let candidate = grid
                .neighbor(self.cell, dir)
                .filter(|&next| grid.is_open(self.cell, dir) && !grid[next].visited);
            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}

/// Depth-first search from `start` to `goal` with backtrack signaling.
///
/// Neighbors are tried in the fixed order Down, Up, Right, Left, and the first path
/// reaching `goal` wins. Each move emits a forward [`StepEvent::PathStep`]; when the
/// branch behind it dead-ends, the same edge is emitted again with `is_undo` set.
/// Dead-end cells stay visited so other branches never re-enter them.
///
/// Only visited flags are touched, and they are cleared before the search starts.
/// Fails when `start` or `goal` lies outside the grid.
pub fn solve_dfs<S: StepSink>(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    mut sink: S,
) -> Result<bool> {
    grid.cell(start.0, start.1)?;
    grid.cell(goal.0, goal.1)?;
    grid.reset_visited();
    tracing::debug!("[solve] searching {:?} -> {:?}", start, goal);

    enter(grid, start, &mut sink);
    if start == goal {
        return Ok(true);
    }

    let mut stack = vec![Frame::new(start)];
    let mut undone = 0usize;

    while let Some(frame) = stack.last_mut() {
        let from = frame.cell;
        match frame.next_candidate(grid) {
            Some(next) => {
                sink.on_step(StepEvent::PathStep {
                    from,
                    to: next,
                    is_undo: false,
                });
                enter(grid, next, &mut sink);
                if next == goal {
                    tracing::debug!(
                        "[solve] goal reached, path length {}, {} steps undone",
                        stack.len(),
                        undone
                    );
                    return Ok(true);
                }
                stack.push(Frame::new(next));
            }
            None => {
                // Dead end: retract the edge that led here
                stack.pop();
                if let Some(parent) = stack.last() {
                    sink.on_step(StepEvent::PathStep {
                        from: parent.cell,
                        to: from,
                        is_undo: true,
                    });
                    undone += 1;
                }
            }
        }
    }

    tracing::debug!("[solve] no path found, {} steps undone", undone);
    Ok(false)
}

fn enter<S: StepSink>(grid: &mut Grid, cell: Coord, sink: &mut S) {
    grid[cell].visited = true;
    sink.on_step(StepEvent::CellVisited { cell });
}
