use rand::{SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::{events::StepSink, maze::Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carve a perfect maze into `grid` with the randomized recursive backtracker.
/// The same seed and dimensions always produce the same walls.
pub fn generate_maze<S: StepSink>(grid: &mut Grid, seed: Option<u64>, sink: S) {
    let mut rng = get_rng(seed);
    recursive_backtrack(grid, &mut rng, sink);
}
