//! Step events emitted while carving and solving a maze.
//!
//! The algorithms never read anything back from a sink, so renderers are free to
//! buffer, drop, or pace events however they like.

use std::sync::mpsc::{Sender, SyncSender};

use crate::maze::{Coord, Walls};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// A cell's wall state changed during generation.
    CellRevealed { cell: Coord, walls: Walls },
    /// The shared wall between `a` and `b` was knocked down during generation.
    EdgeOpened { a: Coord, b: Coord },
    /// The solver entered a cell.
    CellVisited { cell: Coord },
    /// The solver moved along an edge, or retracted that move when `is_undo` is set.
    PathStep { from: Coord, to: Coord, is_undo: bool },
}

/// Receives step events from the generator and the solver.
pub trait StepSink {
    fn on_step(&mut self, event: StepEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StepSink for NullSink {
    fn on_step(&mut self, _event: StepEvent) {}
}

/// Logs every event at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl StepSink for LogSink {
    fn on_step(&mut self, event: StepEvent) {
        match event {
            StepEvent::CellRevealed { cell, walls } => {
                tracing::trace!("[step] cell {:?} walls {}", cell, walls)
            }
            StepEvent::EdgeOpened { a, b } => tracing::trace!("[step] opened {:?} <-> {:?}", a, b),
            StepEvent::CellVisited { cell } => tracing::trace!("[step] visiting {:?}", cell),
            StepEvent::PathStep { from, to, is_undo } => {
                let arrow = if is_undo { "<-" } else { "->" };
                tracing::trace!("[step] path {:?} {} {:?}", from, arrow, to)
            }
        }
    }
}

/// Records events in order.
impl StepSink for Vec<StepEvent> {
    fn on_step(&mut self, event: StepEvent) {
        self.push(event);
    }
}

// A disconnected receiver only means nobody is watching anymore; the algorithm keeps going.
impl StepSink for Sender<StepEvent> {
    fn on_step(&mut self, event: StepEvent) {
        let _ = self.send(event);
    }
}

impl StepSink for SyncSender<StepEvent> {
    fn on_step(&mut self, event: StepEvent) {
        let _ = self.send(event);
    }
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    fn on_step(&mut self, event: StepEvent) {
        (**self).on_step(event);
    }
}

/// Cells along the final solver path, rebuilt from a recorded event stream.
///
/// Forward steps push their target and undo steps pop it again. The first visited cell
/// seeds the path, so a solve that ends where it began yields a single cell.
pub fn solution_path(events: &[StepEvent]) -> Vec<Coord> {
    let mut path: Vec<Coord> = Vec::new();
    for event in events {
        match *event {
            StepEvent::CellVisited { cell } if path.is_empty() => path.push(cell),
            StepEvent::PathStep {
                from,
                to,
                is_undo: false,
            } => {
                if path.is_empty() {
                    path.push(from);
                }
                path.push(to);
            }
            StepEvent::PathStep { is_undo: true, .. } => {
                path.pop();
            }
            _ => {}
        }
    }
    path
}
