//! `gm benchmark` -- time repeated runs of a shell command.
//!
//! Runs are strictly sequential and timed with a monotonic clock. The
//! target's output is discarded; a failing run aborts the benchmark.

use std::time::{Duration, Instant};

use anyhow::Result;
use gitmorph_exec::{CommandRunner, ExecError};
use gitmorph_ui::styles::{render_pass, render_warn};
use tracing::debug;

use crate::cli::BenchmarkArgs;
use crate::context::RuntimeContext;

/// Per-run durations of one benchmark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkReport {
    pub durations: Vec<Duration>,
}

impl BenchmarkReport {
    /// Arithmetic mean of all runs, zero when there were none.
    pub fn mean(&self) -> Duration {
        match u32::try_from(self.durations.len()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.durations.iter().sum::<Duration>() / n,
        }
    }
}

/// Execute the `gm benchmark` command.
pub fn run(ctx: &RuntimeContext, args: &BenchmarkArgs) -> Result<()> {
    println!("{}", render_warn(&format!("Benchmarking command: {}", args.command)));
    println!("{}", render_warn(&format!("Number of runs: {}", args.runs)));

    let report = measure(ctx.runner(), &args.command, args.runs, |index, elapsed| {
        println!("Run {index}: {:.2} ms", millis(elapsed));
    })?;

    println!();
    println!(
        "{}",
        render_pass(&format!("Average time: {:.2} ms", millis(report.mean())))
    );
    Ok(())
}

/// Run `command` `runs` times, calling `on_run` with the 1-based run index
/// and elapsed time after each one.
pub fn measure(
    runner: &dyn CommandRunner,
    command: &str,
    runs: u32,
    mut on_run: impl FnMut(u32, Duration),
) -> Result<BenchmarkReport, ExecError> {
    let mut report = BenchmarkReport::default();
    for index in 1..=runs {
        let start = Instant::now();
        runner.run(command)?;
        let elapsed = start.elapsed();
        debug!(run = index, ?elapsed, "benchmark run");
        on_run(index, elapsed);
        report.durations.push(elapsed);
    }
    Ok(report)
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
