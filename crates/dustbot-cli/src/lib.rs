//! Command-line front end for dustbot.
//!
//! ```text
//! dustbot <depth_first|uniform_cost> <world_file> [--no-trim] [--max-cells N] [-v...]
//! ```
//!
//! Prints one action token per line (`N`, `S`, `W`, `E`, or `V` for
//! clean), then `Nodes generated: <n>` and `Nodes expanded: <n>`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dustbot::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Plan a cleaning route for the robot on a map file.
#[derive(Debug, Parser)]
#[command(name = "dustbot", version, about)]
pub struct Cli {
    /// Search algorithm.
    #[arg(value_enum)]
    pub algorithm: Algorithm,

    /// Map file: column count, row count, then the rows.
    pub world_file: PathBuf,

    /// Keep the depth-first walk after the last clean.
    #[arg(long)]
    pub no_trim: bool,

    /// Refuse worlds with more than this many cells.
    #[arg(long, value_name = "N")]
    pub max_cells: Option<usize>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Algorithm names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Exhaustive depth-first walk.
    #[value(name = "depth_first")]
    DepthFirst,
    /// Nearest-dirty sweep of breadth-first rounds.
    #[value(name = "uniform_cost")]
    UniformCost,
}

impl From<Algorithm> for Strategy {
    fn from(a: Algorithm) -> Self {
        match a {
            Algorithm::DepthFirst => Strategy::DepthFirst,
            Algorithm::UniformCost => Strategy::UniformCost,
        }
    }
}

impl Cli {
    /// Planner configuration selected by the arguments.
    pub fn config(&self) -> PlannerConfig {
        PlannerConfig {
            strategy: self.algorithm.into(),
            trim_after_last_clean: !self.no_trim,
            max_cells: self.max_cells,
        }
    }
}

/// Install the global `tracing` subscriber on stderr.
///
/// With no `-v`, `RUST_LOG` is honoured and defaults to warnings only.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dustbot=warn")),
        1 => EnvFilter::new("dustbot=info"),
        2 => EnvFilter::new("dustbot=debug"),
        _ => EnvFilter::new("dustbot=trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the map, plan, and write the result to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<Plan> {
    let config = cli.config();
    let planner = config.build().context("invalid planner configuration")?;

    let map = load_map(&cli.world_file)
        .with_context(|| format!("failed to load map {}", cli.world_file.display()))?;
    config.check_world(&map.world)?;
    info!(
        path = %cli.world_file.display(),
        rows = map.world.rows(),
        cols = map.world.cols(),
        start = %map.start,
        planner = planner.name(),
        "map loaded"
    );

    let plan = planner
        .plan(&map.world, map.start)
        .with_context(|| format!("{} planner failed", planner.strategy()))?;
    write_plan(out, &plan).context("failed to write plan")?;
    Ok(plan)
}

/// Write `plan` in the robot's output format.
pub fn write_plan(out: &mut dyn Write, plan: &Plan) -> std::io::Result<()> {
    for action in &plan.actions {
        writeln!(out, "{action}")?;
    }
    writeln!(out, "Nodes generated: {}", plan.stats.nodes_generated)?;
    writeln!(out, "Nodes expanded: {}", plan.stats.nodes_expanded)?;
    out.flush()
}
