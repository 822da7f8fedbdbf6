//! Perfect maze generation with a randomized recursive backtracker, and a depth-first
//! solver that reports every forward step and every backtrack.
//!
//! The algorithms in [`generators`] and [`solvers`] only touch the [`maze::Grid`] and
//! report progress through a [`events::StepSink`]. Drawing and pacing live in [`app`].

pub mod app;
pub mod error;
pub mod events;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
