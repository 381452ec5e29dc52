/*!
 * Admission Scheduler - Main Entry Point
 *
 * Loads process records, runs the simulation and writes the per-tick trace
 * to the console, a file, or both.
 */

use admission_scheduler::cli::{self, Cli};
use admission_scheduler::init_tracing;
use clap::Parser;
use tracing::info;

fn main() -> miette::Result<()> {
    // Initialize structured tracing
    init_tracing();

    let cli = Cli::parse();
    info!(input = %cli.input.display(), "Admission scheduler starting");

    let summary = cli::run(&cli)?;
    info!(
        ticks = summary.stats.ticks,
        processes = summary.processes.len(),
        "Admission scheduler finished"
    );
    Ok(())
}
