use std::collections::{HashSet, VecDeque};

use maze_solver::{
    events::{NullSink, StepEvent, solution_path},
    generators::{generate_maze, recursive_backtrack},
    maze::{Coord, Direction, Grid, Walls},
    solvers::solve_maze,
};
use rand::RngCore;

/// Random source that always yields zero, so every choice picks the first candidate.
struct FirstChoice;

impl RngCore for FirstChoice {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

const SIZES: [(usize, usize); 6] = [(1, 1), (1, 10), (10, 1), (2, 2), (7, 5), (20, 31)];

fn generated(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    generate_maze(&mut grid, Some(seed), NullSink);
    grid
}

fn reachable_from(grid: &Grid, start: Coord) -> usize {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        for dir in Direction::ALL {
            if !grid.is_open(cell, dir) {
                continue;
            }
            let next = grid.neighbor(cell, dir).unwrap();
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}

#[test]
fn generated_maze_is_spanning_tree() {
    for (rows, cols) in SIZES {
        for seed in 0..5 {
            let grid = generated(rows, cols, seed);
            assert_eq!(grid.open_edge_count(), rows * cols - 1);
            assert_eq!(reachable_from(&grid, (0, 0)), rows * cols);
        }
    }
}

#[test]
fn generated_walls_are_symmetric() {
    for (rows, cols) in SIZES {
        let mut grid = generated(rows, cols, 11);
        assert!(grid.walls_are_symmetric());
        solve_maze(&mut grid, NullSink);
        assert!(grid.walls_are_symmetric());
    }
}

#[test]
fn entrance_and_exit_are_open() {
    for (rows, cols) in SIZES {
        let grid = generated(rows, cols, 3);
        assert!(!grid[(0, 0)].has_left_wall());
        assert!(!grid[(rows - 1, cols - 1)].has_right_wall());
    }
}

#[test]
fn same_seed_same_maze() {
    let a = generated(15, 12, 2024);
    let b = generated(15, 12, 2024);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn visited_flags_cleared_after_generation() {
    let grid = generated(9, 9, 5);
    assert!(grid.cells().all(|(_, cell)| !cell.visited));
}

#[test]
fn solver_path_is_connected_and_simple() {
    for (rows, cols) in SIZES {
        for seed in 0..5 {
            let mut grid = generated(rows, cols, seed);
            let mut events: Vec<StepEvent> = Vec::new();
            assert!(solve_maze(&mut grid, &mut events));

            let path = solution_path(&events);
            assert_eq!(path.first(), Some(&(0, 0)));
            assert_eq!(path.last(), Some(&(rows - 1, cols - 1)));
            assert_eq!(path.iter().collect::<HashSet<_>>().len(), path.len());
            for pair in path.windows(2) {
                assert_eq!(grid.has_wall_between(pair[0], pair[1]), Ok(false));
            }
        }
    }
}

#[test]
fn every_undo_retracts_a_forward_step() {
    let mut grid = generated(12, 12, 8);
    let mut events: Vec<StepEvent> = Vec::new();
    solve_maze(&mut grid, &mut events);

    let mut open_steps: Vec<(Coord, Coord)> = Vec::new();
    for event in events {
        if let StepEvent::PathStep { from, to, is_undo } = event {
            if is_undo {
                assert_eq!(open_steps.pop(), Some((from, to)));
            } else {
                open_steps.push((from, to));
            }
        }
    }
}

#[test]
fn disconnected_grid_is_unsolvable() {
    let mut grid = Grid::new(2, 1).unwrap();
    let mut events: Vec<StepEvent> = Vec::new();
    assert!(!solve_maze(&mut grid, &mut events));
    assert!(!events.iter().any(|e| matches!(e, StepEvent::PathStep { .. })));
}

#[test]
fn single_cell_maze() {
    let mut grid = generated(1, 1, 0);
    assert_eq!(
        grid[(0, 0)].walls,
        Walls {
            left: false,
            right: false,
            top: true,
            bottom: true
        }
    );
    let mut events: Vec<StepEvent> = Vec::new();
    assert!(solve_maze(&mut grid, &mut events));
    assert!(!events.iter().any(|e| matches!(e, StepEvent::PathStep { .. })));
}

#[test]
fn two_by_two_golden() {
    let mut grid = Grid::new(2, 2).unwrap();
    recursive_backtrack(&mut grid, &mut FirstChoice, NullSink);
    assert_eq!(
        grid.to_string(),
        concat!(
            "+---+---+\n",
            "    |   |\n",
            "+   +   +\n",
            "|        \n",
            "+---+---+\n",
        )
    );

    let mut events: Vec<StepEvent> = Vec::new();
    assert!(solve_maze(&mut grid, &mut events));
    assert_eq!(
        events,
        vec![
            StepEvent::CellVisited { cell: (0, 0) },
            StepEvent::PathStep {
                from: (0, 0),
                to: (1, 0),
                is_undo: false
            },
            StepEvent::CellVisited { cell: (1, 0) },
            StepEvent::PathStep {
                from: (1, 0),
                to: (1, 1),
                is_undo: false
            },
            StepEvent::CellVisited { cell: (1, 1) },
        ]
    );
}

#[test]
fn two_by_two_seeded_golden() {
    // Seed 4 turns right out of the entrance, then every later choice is forced.
    let mut grid = Grid::new(2, 2).unwrap();
    generate_maze(&mut grid, Some(4), NullSink);
    assert_eq!(
        grid.to_string(),
        concat!(
            "+---+---+\n",
            "        |\n",
            "+---+   +\n",
            "|        \n",
            "+---+---+\n",
        )
    );

    let mut events: Vec<StepEvent> = Vec::new();
    assert!(solve_maze(&mut grid, &mut events));
    assert_eq!(
        events,
        vec![
            StepEvent::CellVisited { cell: (0, 0) },
            StepEvent::PathStep {
                from: (0, 0),
                to: (0, 1),
                is_undo: false
            },
            StepEvent::CellVisited { cell: (0, 1) },
            StepEvent::PathStep {
                from: (0, 1),
                to: (1, 1),
                is_undo: false
            },
            StepEvent::CellVisited { cell: (1, 1) },
        ]
    );
}

#[test]
fn large_maze_does_not_overflow_stack() {
    let mut grid = generated(300, 300, 1);
    assert_eq!(grid.open_edge_count(), 300 * 300 - 1);
    assert!(solve_maze(&mut grid, NullSink));
}
