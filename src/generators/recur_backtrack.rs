use rand::Rng;

use crate::{
    events::{StepEvent, StepSink},
    maze::{Coord, Direction, Grid},
};

/// Randomized depth-first carving from the entrance.
///
/// Every step picks uniformly among the current cell's unvisited neighbors, knocks down
/// the shared wall on both sides and descends into the neighbor. A cell with no
/// unvisited neighbor left is popped, handing control back to the cell it was reached
/// from. An explicit stack replaces recursion, so large grids cannot overflow the call
/// stack.
///
/// Afterwards the entrance's left wall and the exit's right wall are opened and all
/// visited flags are cleared. The open edges form a spanning tree of the grid.
pub fn recursive_backtrack<R: Rng, S: StepSink>(grid: &mut Grid, rng: &mut R, mut sink: S) {
    tracing::debug!(
        "[generate] carving {}x{} maze",
        grid.num_rows(),
        grid.num_cols()
    );
    grid.reset_visited();
    for (cell, c) in grid.cells() {
        sink.on_step(StepEvent::CellRevealed {
            cell,
            walls: c.walls,
        });
    }

    let start = grid.entrance();
    grid[start].visited = true;

    // The stack will keep only cells that may still have unvisited neighbors
    let mut stack: Vec<Coord> = vec![start];
    let mut carved = 0usize;

    while let Some(cell) = stack.pop() {
        let neighbors = grid
            .neighbors_with_direction(cell)
            .filter(|&(_, c)| !grid[c].visited)
            .collect::<Vec<(Direction, Coord)>>();

        if neighbors.is_empty() {
            continue;
        }

        let (dir, neighbor) = neighbors[rng.random_range(0..neighbors.len())];
        grid[cell].walls.set(dir, false);
        grid[neighbor].walls.set(dir.opposite(), false);
        grid[neighbor].visited = true;
        carved += 1;

        sink.on_step(StepEvent::EdgeOpened {
            a: cell,
            b: neighbor,
        });
        reveal(grid, cell, &mut sink);
        reveal(grid, neighbor, &mut sink);

        // Put the cell back first so we can look at another neighbor of this cell later
        stack.push(cell);
        // Put the neighbor on top to carve further in that neighbor's direction
        stack.push(neighbor);
    }

    let (entrance, exit) = (grid.entrance(), grid.exit());
    grid[entrance].walls.left = false;
    reveal(grid, entrance, &mut sink);
    grid[exit].walls.right = false;
    reveal(grid, exit, &mut sink);

    grid.reset_visited();
    tracing::debug!("[generate] done, {} passages carved", carved);
}

fn reveal<S: StepSink>(grid: &Grid, cell: Coord, sink: &mut S) {
    sink.on_step(StepEvent::CellRevealed {
        cell,
        walls: grid[cell].walls,
    });
}
