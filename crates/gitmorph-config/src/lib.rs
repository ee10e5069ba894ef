//! Configuration management for GitMorph.
//!
//! GitMorph keeps two small key/value documents on disk:
//!
//! - the **global** document under the user's home profile
//!   (`~/.gitmorph/config.json`), and
//! - the **local** document next to the repository
//!   (`./.gitmorph.json`), which may only be written inside a git work tree.
//!
//! The two are never merged. Every operation names exactly one target
//! [`ConfigScope`]. See [`store::ConfigStore`] for the read/write rules.

pub mod document;
pub mod error;
pub mod paths;
pub mod store;

pub use document::ConfigDocument;
pub use error::{ConfigError, Result};
pub use paths::{ConfigPaths, ConfigScope};
pub use store::ConfigStore;
