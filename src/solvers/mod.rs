mod dfs;

pub use dfs::solve_dfs;

use crate::{events::StepSink, maze::Grid};

/// Search for a path from the maze entrance to its exit.
/// Returns whether the exit was reached.
pub fn solve_maze<S: StepSink>(grid: &mut Grid, sink: S) -> bool {
    let start = grid.entrance();
    let goal = grid.exit();
    // Entrance and exit are in bounds for every constructible grid
    solve_dfs(grid, start, goal, sink).unwrap_or(false)
}
