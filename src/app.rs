//! Interactive front-end: prompt for a configuration on stdin, then stream
//! the maze to the terminal one row at a time.

use std::io::Write;
use std::time::Duration;

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::generators::{EllerConfig, EllerMaze};
use crate::render::row_to_ascii;

/// Pause between streamed rows so generation reads as an animation.
const ROW_DELAY: Duration = Duration::from_millis(40);
/// Rows to stream before finalizing when no height was configured.
const ENDLESS_PREVIEW_ROWS: usize = 40;

/// Route tracing output to a log file next to the binary. The returned
/// guard must stay alive until exit so buffered lines are flushed.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "ellermaze.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    guard
}

pub fn run() -> std::io::Result<()> {
    let _guard = init_logging();

    let mut input = String::new();
    println!("Enter maze width and optionally height (blank height for an endless maze):");
    std::io::stdin().read_line(&mut input)?;

    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<usize>().ok())
        .collect::<Vec<_>>();
    let Some(&width) = dims.first() else {
        eprintln!("Please enter a valid number for the width.");
        return Ok(());
    };
    let height = dims.get(1).copied();

    println!("Enter a seed (blank for a random maze):");
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let seed = input.trim().to_string();

    println!("Enter wall and floor probabilities (blank for 0.5 0.5):");
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let probs = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<f64>().ok())
        .collect::<Vec<_>>();
    let wall_probability = probs.first().copied().unwrap_or(0.5);
    let floor_probability = probs.get(1).copied().unwrap_or(0.5);

    let mut config = EllerConfig::new(width)
        .with_wall_probability(wall_probability)
        .with_floor_probability(floor_probability);
    if let Some(h) = height {
        config = config.with_height(h);
    }
    if !seed.is_empty() {
        config = config.with_seed(&seed);
    }

    tracing::info!(
        "[app] width={} height={:?} wallp={} floorp={} seed={:?}",
        width,
        height,
        wall_probability,
        floor_probability,
        seed
    );

    let mut maze = match EllerMaze::new(config) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    stream_rows(&mut maze, height)?;
    tracing::info!("[app] finished after {} rows", maze.rows_produced());
    Ok(())
}

/// Print the top boundary, then pull and print rows until the maze
/// finalizes. An endless maze is cut off after a fixed preview and
/// finalized explicitly so the output still ends in a closed row.
fn stream_rows(maze: &mut EllerMaze, height: Option<usize>) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();

    let top = format!(" {}", "_".repeat(maze.width() * 2 - 1));
    queue!(
        stdout,
        style::PrintStyledContent(top.with(Color::White)),
        style::Print("\n")
    )?;
    stdout.flush()?;

    loop {
        let finalize = height.is_none() && maze.rows_produced() + 1 >= ENDLESS_PREVIEW_ROWS;
        let step = maze.step(finalize);
        let line = row_to_ascii(&step.row);
        tracing::debug!(
            "[stream] row {} rendered, done={}",
            maze.rows_produced(),
            step.done
        );
        queue!(
            stdout,
            style::PrintStyledContent(line.with(Color::White)),
            style::Print("\n")
        )?;
        stdout.flush()?;
        if step.done {
            break;
        }
        std::thread::sleep(ROW_DELAY);
    }
    Ok(())
}
