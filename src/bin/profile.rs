use ellermaze::{EllerConfig, EllerMaze};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let rows = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100_000);

    let config = EllerConfig::new(255).with_seed("profile");
    let mut maze = match EllerMaze::new(config) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let start = std::time::Instant::now();
    for _ in 0..rows {
        let step = maze.step(false);
        std::hint::black_box(&step.row);
    }
    let elapsed = start.elapsed();
    println!(
        "{} rows of width {} in {:.2?} ({:.0} rows/s)",
        rows,
        maze.width(),
        elapsed,
        rows as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}
