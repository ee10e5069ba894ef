//! Command handler modules for the `gm` CLI.
//!
//! Each verb with its own behavior lives in its own module and exposes a
//! `run(ctx, args)` entry point. Thin pass-through verbs share
//! [`passthrough::run`].

pub mod analyze;
pub mod benchmark;
pub mod completion;
pub mod config_cmd;
pub mod docker;
pub mod hooks;
pub mod ignore;
pub mod passthrough;
pub mod scaffold;
pub mod search;
pub mod todo;
