use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use maze_solver::app::{App, AppConfig, draw_solution};

/// Generate a perfect maze and solve it with depth-first search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows
    #[arg(value_parser = parse_dimension)]
    num_rows: usize,

    /// Number of columns
    #[arg(value_parser = parse_dimension)]
    num_cols: usize,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after each generation or solving step, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Don't print the solved maze
    #[arg(long)]
    quiet: bool,
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("not a positive integer: {}", e)),
    }
}

/// Log to stderr through a non-blocking writer. `RUST_LOG` picks the level, `info` by default.
/// The returned guard flushes pending lines when dropped.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();
    guard
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing();

    let app = App::new(AppConfig {
        num_rows: args.num_rows,
        num_cols: args.num_cols,
        seed: args.seed,
        step_delay: Duration::from_millis(args.delay_ms),
        ..AppConfig::default()
    });
    let outcome = app.run()?;

    if !args.quiet {
        print!("{}", draw_solution(&outcome.grid, &outcome.path, true));
    }
    if outcome.goal_reached {
        println!("Maze solved! Goal reached in {} steps.", outcome.path.len() - 1);
    } else {
        println!("No path found to the goal.");
    }
    Ok(())
}
