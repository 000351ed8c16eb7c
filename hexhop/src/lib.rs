//! hexhop: plan a frog's route across a hexagonal pond map.
//!
//! The binary is a thin wrapper around [`run`]; everything it does is
//! reachable from here so it can be tested without spawning a process.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hexhop_paths::{Route, Scoring};
use hexhop_pond::open_engine;

#[derive(Debug, Parser)]
#[command(name = "hexhop", author, version, about, long_about = None)]
pub struct Cli {
    /// Pond map file
    pub map: PathBuf,

    /// Print the route as JSON
    #[arg(long)]
    pub json: bool,

    /// JSON file overriding entries of the default scoring table
    #[arg(long, value_name = "FILE")]
    pub scoring: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Default log filter for a `-v` count. `RUST_LOG` still wins when set.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Read a scoring table. Missing fields keep their default values.
pub fn load_scoring(path: &Path) -> Result<Scoring> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read scoring file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse scoring file {}", path.display()))
}

/// Plan a route for `cli.map` and write the outcome to `out`.
///
/// A map that cannot be loaded still prints `No solution` before the error
/// is returned.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let scoring = match &cli.scoring {
        Some(path) => load_scoring(path)?,
        None => Scoring::default(),
    };

    let engine = match open_engine(&cli.map) {
        Ok(engine) => engine.with_scoring(scoring),
        Err(err) => {
            writeln!(out, "{}", Route::NoSolution)?;
            return Err(err).context("cannot plan a route");
        }
    };

    let route = engine.find_path().context("route search failed")?;
    log::info!("{}: {route}", cli.map.display());

    if cli.json {
        serde_json::to_writer(&mut *out, &route)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{route}")?;
    }
    Ok(())
}
