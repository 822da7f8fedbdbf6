use std::{collections::HashSet, sync::mpsc::Receiver, time::Duration};

use crossterm::style::{Color, Stylize};

use crate::{
    events::{LogSink, StepEvent, StepSink, solution_path},
    maze::{Coord, Grid},
};

/// Counts of what the render thread saw, plus the solver's final path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub cells_revealed: usize,
    pub edges_opened: usize,
    pub cells_visited: usize,
    pub forward_steps: usize,
    pub undo_steps: usize,
    /// Solution path rebuilt from the solver's events
    pub path: Vec<Coord>,
}

impl RenderSummary {
    pub fn total_events(&self) -> usize {
        self.cells_revealed
            + self.edges_opened
            + self.cells_visited
            + self.forward_steps
            + self.undo_steps
    }
}

/// Consumes the step stream on the render thread.
pub struct StepRenderer {
    /// Time to wait after each event to simulate drawing it
    step_delay: Duration,
    summary: RenderSummary,
    /// Solver events kept to rebuild the final path
    solver_events: Vec<StepEvent>,
}

impl StepRenderer {
    pub fn new(step_delay: Duration) -> Self {
        Self {
            step_delay,
            summary: RenderSummary::default(),
            solver_events: Vec::new(),
        }
    }

    /// Drain `step_event_rx` until every sender is dropped.
    pub fn render(mut self, step_event_rx: Receiver<StepEvent>) -> RenderSummary {
        tracing::debug!("[render] started, step delay {:?}", self.step_delay);
        // Channel disconnects once the compute thread is done
        for event in step_event_rx {
            self.render_event(event);
            if !self.step_delay.is_zero() {
                std::thread::sleep(self.step_delay);
            }
        }
        self.summary.path = solution_path(&self.solver_events);
        tracing::debug!("[render] channel closed, exiting render thread");
        self.summary
    }

    fn render_event(&mut self, event: StepEvent) {
        LogSink.on_step(event);
        match event {
            StepEvent::CellRevealed { .. } => self.summary.cells_revealed += 1,
            StepEvent::EdgeOpened { .. } => self.summary.edges_opened += 1,
            StepEvent::CellVisited { .. } => {
                self.summary.cells_visited += 1;
                self.solver_events.push(event);
            }
            StepEvent::PathStep { is_undo, .. } => {
                if is_undo {
                    self.summary.undo_steps += 1;
                } else {
                    self.summary.forward_steps += 1;
                }
                self.solver_events.push(event);
            }
        }
    }
}

/// ASCII drawing of `grid` with `path` marked: start in green, goal in red, the cells
/// between in yellow. Plain characters only when `colored` is false.
pub fn draw_solution(grid: &Grid, path: &[Coord], colored: bool) -> String {
    let on_path = path.iter().copied().collect::<HashSet<Coord>>();
    let (start, goal) = (grid.entrance(), grid.exit());
    let body = |coord: Coord| {
        let (symbol, color) = if coord == start {
            (" S ", Color::Green)
        } else if coord == goal {
            (" G ", Color::Red)
        } else if on_path.contains(&coord) {
            (" * ", Color::Yellow)
        } else {
            return "   ".to_string();
        };
        if colored {
            symbol.with(color).to_string()
        } else {
            symbol.to_string()
        }
    };

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = grid.draw(&mut out, body);
    out
}
