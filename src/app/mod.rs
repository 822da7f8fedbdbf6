mod renderer;

use std::{
    sync::mpsc::{Receiver, SyncSender},
    time::Duration,
};

pub use renderer::{RenderSummary, StepRenderer, draw_solution};

use crate::{
    events::StepEvent,
    generators::generate_maze,
    maze::{Coord, Grid, Layout},
    solvers::solve_maze,
};

/// Settings for one generate-and-solve run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub num_rows: usize,
    pub num_cols: usize,
    /// Seed for the generator. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Where a drawing surface would place the cells
    pub layout: Layout,
    /// Pause after each step event, a.k.a. animation speed
    pub step_delay: Duration,
    /// Maximum number of step events buffered between the compute and render threads
    pub max_events_in_channel: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            num_rows: 14,
            num_cols: 18,
            seed: None,
            layout: Layout::default(),
            step_delay: Duration::ZERO,
            max_events_in_channel: 1000,
        }
    }
}

/// Everything a run produced.
#[derive(Debug)]
pub struct Outcome {
    pub grid: Grid,
    pub goal_reached: bool,
    /// Cells from entrance to exit, empty when the exit was not reached
    pub path: Vec<Coord>,
    pub summary: RenderSummary,
}

pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generate and solve a maze on a compute thread while a render thread drains the
    /// step events at the configured pace.
    pub fn run(&self) -> anyhow::Result<Outcome> {
        let grid = Grid::with_layout(self.config.num_rows, self.config.num_cols, self.config.layout)?;
        tracing::info!(
            "Starting {}x{} maze, seed {:?}",
            grid.num_rows(),
            grid.num_cols(),
            self.config.seed
        );

        let (step_event_tx, step_event_rx) =
            std::sync::mpsc::sync_channel::<StepEvent>(self.config.max_events_in_channel);

        let step_delay = self.config.step_delay;
        let render_thread_handle = std::thread::spawn(move || -> RenderSummary {
            StepRenderer::new(step_delay).render(step_event_rx)
        });

        let seed = self.config.seed;
        let compute_thread_handle =
            std::thread::spawn(move || App::compute(grid, seed, step_event_tx));

        let (grid, goal_reached) = compute_thread_handle
            .join()
            .map_err(|_| anyhow::anyhow!("Compute thread panicked"))?;
        let summary = render_thread_handle
            .join()
            .map_err(|_| anyhow::anyhow!("Render thread panicked"))?;

        let path = if goal_reached {
            summary.path.clone()
        } else {
            Vec::new()
        };
        tracing::info!(
            "Finished: goal reached {}, path length {}, {} events rendered",
            goal_reached,
            path.len(),
            summary.total_events()
        );
        Ok(Outcome {
            grid,
            goal_reached,
            path,
            summary,
        })
    }

    /// Run without the render thread's pacing, discarding events as they arrive.
    /// Useful to time the algorithms on large grids.
    pub fn profile(&self, num_iterations: usize) -> anyhow::Result<Duration> {
        let started = std::time::Instant::now();
        for iteration in 0..num_iterations {
            let grid = Grid::with_layout(self.config.num_rows, self.config.num_cols, self.config.layout)?;
            let (tx, rx) = std::sync::mpsc::sync_channel::<StepEvent>(self.config.max_events_in_channel);
            let drain_thread_handle = std::thread::spawn(move || drain(rx));
            let seed = self.config.seed.map(|s| s.wrapping_add(iteration as u64));
            let (_, goal_reached) = App::compute(grid, seed, tx);
            let drained = drain_thread_handle
                .join()
                .map_err(|_| anyhow::anyhow!("Drain thread panicked"))?;
            tracing::debug!(
                "[profile] iteration {} goal reached {}, {} events",
                iteration,
                goal_reached,
                drained
            );
        }
        Ok(started.elapsed())
    }

    /// Generate and solve the maze, streaming every step into `step_event_tx`.
    /// Returns the grid and whether the goal was reached.
    fn compute(
        mut grid: Grid,
        seed: Option<u64>,
        mut step_event_tx: SyncSender<StepEvent>,
    ) -> (Grid, bool) {
        tracing::debug!("[compute] generating");
        generate_maze(&mut grid, seed, &mut step_event_tx);
        tracing::debug!("[compute] solving");
        let goal_reached = solve_maze(&mut grid, &mut step_event_tx);
        // step_event_tx is dropped here, which ends the render loop
        (grid, goal_reached)
    }
}

fn drain(rx: Receiver<StepEvent>) -> usize {
    rx.into_iter().count()
}
