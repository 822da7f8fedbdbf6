use maze_solver::app::{App, AppConfig};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    let app = App::new(AppConfig {
        num_rows: 1000,
        num_cols: 1000,
        seed: Some(0),
        ..AppConfig::default()
    });
    let elapsed = app.profile(num_iters)?;
    println!("{} iteration(s) in {:?}", num_iters, elapsed);
    Ok(())
}
