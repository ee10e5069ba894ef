//! `gm config` -- manage the global and local configuration documents.
//!
//! Exactly one of `--set`, `--delete` and `--view` is honored per
//! invocation; clap rejects combinations. `--local` selects the
//! repository-scoped document unless `--global` is also given.

use anyhow::{Result, bail};
use gitmorph_config::{ConfigError, ConfigScope, ConfigStore};
use gitmorph_exec::RepoDetector;
use gitmorph_ui::styles::render_accent;
use tracing::debug;

use crate::cli::ConfigArgs;
use crate::context::RuntimeContext;
use crate::output::{display_feedback, print_notice, report_error};

/// What a `gm config` invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigReport {
    Updated { key: String, value: String },
    Deleted { key: String },
    View(String),
    /// No action flag was given.
    Usage,
}

/// Execute the `gm config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    let store = ctx.config_store()?;
    match execute(&store, args) {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) if matches!(
            e.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotARepository)
        ) =>
        {
            report_error(&e.to_string());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Apply the action selected by `args` to `store`.
///
/// # Errors
///
/// Propagates every [`ConfigError`]; callers decide which are recoverable.
/// A `--set` without exactly one key and one value is rejected.
pub fn execute<D: RepoDetector>(store: &ConfigStore<D>, args: &ConfigArgs) -> Result<ConfigReport> {
    let scope = ConfigScope::from_flags(args.global, args.local);
    debug!(scope = scope.as_str(), "config");

    if let Some(pair) = &args.set {
        let [key, value] = pair.as_slice() else {
            bail!("--set expects exactly two values: KEY VALUE");
        };
        store.set(scope, key, value)?;
        return Ok(ConfigReport::Updated {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    if let Some(key) = &args.delete {
        let existed = store.delete(scope, key)?;
        debug!(key = %key, existed, "config delete");
        return Ok(ConfigReport::Deleted { key: key.clone() });
    }

    if args.view {
        return Ok(ConfigReport::View(store.view(scope)?));
    }

    Ok(ConfigReport::Usage)
}

fn print_report(report: &ConfigReport) {
    match report {
        ConfigReport::Updated { key, value } => {
            display_feedback(&format!("Configuration updated: {key} = {value}"));
        }
        ConfigReport::Deleted { key } => {
            display_feedback(&format!("Configuration key deleted: {key}"));
        }
        ConfigReport::View(json) => {
            println!("{}", render_accent("Current configuration:"));
            println!("{json}");
        }
        ConfigReport::Usage => {
            print_notice("Use --set, --delete, or --view to manage configuration.");
        }
    }
}
