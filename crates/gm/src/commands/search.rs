//! `gm search` -- recursive text search through `grep`.
//!
//! grep exits 1 when nothing matched; that is reported as an empty result.
//! Any other failure propagates.

use anyhow::Result;
use gitmorph_exec::{CommandRunner, ExecError};
use tracing::debug;

use crate::cli::SearchArgs;
use crate::context::RuntimeContext;
use crate::output::{print_captured, print_notice};

/// grep's exit status for "no lines selected".
const NO_MATCH_EXIT: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(String),
    NoMatches,
}

/// Execute the `gm search` command.
pub fn run(ctx: &RuntimeContext, args: &SearchArgs) -> Result<()> {
    match execute(ctx.runner(), args)? {
        SearchOutcome::Matches(text) => print_captured(&text),
        SearchOutcome::NoMatches => print_notice("No matches found."),
    }
    Ok(())
}

pub fn command_line(args: &SearchArgs) -> String {
    if args.ignore_case {
        format!("grep -R -i \"{}\" .", args.query)
    } else {
        format!("grep -R \"{}\" .", args.query)
    }
}

pub fn execute(runner: &dyn CommandRunner, args: &SearchArgs) -> Result<SearchOutcome, ExecError> {
    let line = command_line(args);
    debug!(command = %line, "search");
    match runner.run(&line) {
        Ok(output) => Ok(SearchOutcome::Matches(output.stdout)),
        Err(e) if e.exit_code() == Some(NO_MATCH_EXIT) => Ok(SearchOutcome::NoMatches),
        Err(e) => Err(e),
    }
}
