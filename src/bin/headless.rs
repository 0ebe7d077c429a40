//! Headless runner: plays a seeded game from a fixed command script and prints
//! the final snapshot as one JSON line on stdout.
//!
//! Usage: `headless [--seed N] [--frames N] [--rows N] [--cols N]`

use anyhow::Result;
use log::info;

use tui_blockfall::headless::{parse_headless_args, run_headless};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = parse_headless_args(&args)?;
    info!(
        "headless run: seed {} for up to {} frames on {}x{}",
        cfg.seed, cfg.frames, cfg.rows, cfg.cols
    );

    let (snapshot, stats) = run_headless(&cfg)?;
    info!(
        "done: {} pieces locked, {} rows cleared, score {}",
        stats.pieces_locked, stats.rows_cleared, snapshot.score
    );

    println!("{}", serde_json::to_string(&snapshot)?);
    Ok(())
}
