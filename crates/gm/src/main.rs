//! `gm` -- GitMorph, simplified Git operations and beyond.
//!
//! Parses CLI arguments with clap, builds the runtime context, and dispatches
//! to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use clap::{CommandFactory, Parser};
use gitmorph_exec::ExecError;
use gitmorph_ui::styles::{render_fail, render_warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::passthrough;
use context::RuntimeContext;

const LOG_FILTER: &str = "gm=debug,gitmorph_exec=debug,gitmorph_config=debug";

fn main() {
    let cli = Cli::parse();

    if cli.global.verbose {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let Some(command) = cli.command else {
        Cli::command().print_help().ok();
        println!();
        return;
    };

    let result = RuntimeContext::from_env().and_then(|ctx| dispatch(&ctx, command));

    if let Err(e) = result {
        eprintln!("{} {:#}", render_fail("Error:"), e);
        let stderr = e
            .chain()
            .find_map(|cause| cause.downcast_ref::<ExecError>())
            .and_then(ExecError::stderr)
            .filter(|s| !s.is_empty());
        if let Some(stderr) = stderr {
            eprintln!("{} {}", render_warn("Output:"), stderr);
        }
        std::process::exit(1);
    }
}

fn dispatch(ctx: &RuntimeContext, command: Commands) -> anyhow::Result<()> {
    match command {
        // Git
        Commands::Init(args) => passthrough::run(ctx, &args),
        Commands::Clone(args) => passthrough::run(ctx, &args),
        Commands::Stage(args) => passthrough::run(ctx, &args),
        Commands::Save(args) => passthrough::run(ctx, &args),
        Commands::Upload(args) => passthrough::run(ctx, &args),
        Commands::Download(args) => passthrough::run(ctx, &args),
        Commands::Status(args) => passthrough::run(ctx, &args),
        Commands::History(args) => passthrough::run(ctx, &args),
        Commands::Branch(args) => passthrough::run(ctx, &args),
        Commands::Switch(args) => passthrough::run(ctx, &args),
        Commands::Merge(args) => passthrough::run(ctx, &args),
        Commands::Delete(args) => passthrough::run(ctx, &args),
        Commands::Stash(args) => passthrough::run(ctx, &args),
        Commands::ApplyStash(args) => passthrough::run(ctx, &args),
        Commands::Rebase(args) => passthrough::run(ctx, &args),
        Commands::Diff(args) => passthrough::run(ctx, &args),
        Commands::Blame(args) => passthrough::run(ctx, &args),
        Commands::Hooks(args) => commands::hooks::run(ctx, &args),
        Commands::Analyze => commands::analyze::run(ctx),
        // Beyond git
        Commands::CreateIgnore(args) => commands::ignore::run(ctx, &args),
        Commands::Todo(args) => commands::todo::run(ctx, &args),
        Commands::Scaffold(args) => commands::scaffold::run(ctx, &args),
        Commands::Search(args) => commands::search::run(ctx, &args),
        Commands::Lint(args) => passthrough::run(ctx, &args),
        Commands::Benchmark(args) => commands::benchmark::run(ctx, &args),
        Commands::Dependencies(args) => passthrough::run(ctx, &args),
        Commands::Docker => commands::docker::run(ctx),
        Commands::Test(args) => passthrough::run(ctx, &args),
        Commands::Config(args) => commands::config_cmd::run(ctx, &args),
        Commands::Completion(args) => commands::completion::run(ctx, &args),
    }
}
