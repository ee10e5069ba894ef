//! Reading and writing the global and local configuration documents.
//!
//! Rules:
//!
//! - A missing file reads as an empty document.
//! - A file that is not a JSON object of string values, including an empty
//!   file, is a [`ConfigError::Parse`], never a partial or empty document.
//! - The local document is only visible inside a git work tree. Outside one,
//!   reads return an empty document and writes fail with
//!   [`ConfigError::NotARepository`] without touching the disk.
//! - Writes go to a temporary file in the destination directory which is then
//!   renamed over the target, so readers never observe a truncated document.
//!   There is no locking: two processes writing the same file race and the
//!   last rename wins.

use std::io::Write;
use std::path::Path;

use gitmorph_exec::RepoDetector;
use tracing::debug;

use crate::document::ConfigDocument;
use crate::error::{ConfigError, Result};
use crate::paths::{ConfigPaths, ConfigScope};

/// Access to both configuration documents.
#[derive(Debug)]
pub struct ConfigStore<D> {
    paths: ConfigPaths,
    repo: D,
}

impl<D: RepoDetector> ConfigStore<D> {
    /// Create a store over `paths`, gating local access with `repo`.
    pub fn new(paths: ConfigPaths, repo: D) -> Self {
        Self { paths, repo }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    /// Read the global document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] on I/O failure, [`ConfigError::Parse`] on
    /// malformed content.
    pub fn read_global(&self) -> Result<ConfigDocument> {
        load_document(&self.paths.global)
    }

    /// Overwrite the global document, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Write`] on I/O failure.
    pub fn write_global(&self, doc: &ConfigDocument) -> Result<()> {
        save_document(&self.paths.global, doc)
    }

    /// Read the local document, or an empty one outside a work tree.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Read`] on I/O failure, [`ConfigError::Parse`] on
    /// malformed content.
    pub fn read_local(&self) -> Result<ConfigDocument> {
        if !self.repo.is_repository() {
            debug!("not inside a work tree; local configuration is empty");
            return Ok(ConfigDocument::default());
        }
        load_document(&self.paths.local)
    }

    /// Overwrite the local document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotARepository`] outside a work tree (nothing is
    /// written), [`ConfigError::Write`] on I/O failure.
    pub fn write_local(&self, doc: &ConfigDocument) -> Result<()> {
        if !self.repo.is_repository() {
            return Err(ConfigError::NotARepository);
        }
        save_document(&self.paths.local, doc)
    }

    pub fn read(&self, scope: ConfigScope) -> Result<ConfigDocument> {
        match scope {
            ConfigScope::Global => self.read_global(),
            ConfigScope::Local => self.read_local(),
        }
    }

    pub fn write(&self, scope: ConfigScope, doc: &ConfigDocument) -> Result<()> {
        match scope {
            ConfigScope::Global => self.write_global(doc),
            ConfigScope::Local => self.write_local(doc),
        }
    }

    // -----------------------------------------------------------------------
    // Verb-level operations
    // -----------------------------------------------------------------------

    /// Read `scope`, assign `key = value`, write it back.
    pub fn set(&self, scope: ConfigScope, key: &str, value: &str) -> Result<()> {
        let mut doc = self.read(scope)?;
        doc.set(key, value);
        self.write(scope, &doc)
    }

    /// Read `scope`, remove `key`, write it back.
    ///
    /// Returns whether the key was present. Removing an absent key leaves
    /// the document content unchanged.
    pub fn delete(&self, scope: ConfigScope, key: &str) -> Result<bool> {
        let mut doc = self.read(scope)?;
        let existed = doc.remove(key).is_some();
        self.write(scope, &doc)?;
        Ok(existed)
    }

    /// Render `scope` as pretty-printed JSON.
    pub fn view(&self, scope: ConfigScope) -> Result<String> {
        let doc = self.read(scope)?;
        doc.to_pretty_json().map_err(ConfigError::Serialize)
    }
}

// ---------------------------------------------------------------------------
// File helpers
// ---------------------------------------------------------------------------

fn load_document(path: &Path) -> Result<ConfigDocument> {
    if !path.exists() {
        debug!(path = %path.display(), "config file absent");
        return Ok(ConfigDocument::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "config file loaded");
    Ok(doc)
}

fn save_document(path: &Path, doc: &ConfigDocument) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut json = doc.to_pretty_json().map_err(ConfigError::Serialize)?;
    json.push('\n');

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), entries = doc.len(), "config file written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use gitmorph_exec::testing::FixedRepo;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    struct Fixture {
        _home: TempDir,
        cwd: TempDir,
        paths: ConfigPaths,
    }

    fn fixture() -> Fixture {
        let home = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::new(&home.path().join("nested").join(".gitmorph"), cwd.path());
        Fixture {
            _home: home,
            cwd,
            paths,
        }
    }

    #[test]
    fn missing_files_read_as_empty() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(true));
        assert!(store.read_global().unwrap().is_empty());
        assert!(store.read_local().unwrap().is_empty());
    }

    #[test]
    fn empty_file_is_parse_error() {
        let fx = fixture();
        std::fs::write(&fx.paths.local, "  \n").unwrap();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(true));
        assert!(matches!(
            store.read_local(),
            Err(ConfigError::Parse { .. })
        ));

        std::fs::create_dir_all(fx.paths.global.parent().unwrap()).unwrap();
        std::fs::write(&fx.paths.global, "").unwrap();
        assert!(matches!(
            store.read_global(),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn malformed_global_is_parse_error() {
        let fx = fixture();
        std::fs::create_dir_all(fx.paths.global.parent().unwrap()).unwrap();
        std::fs::write(&fx.paths.global, "{ not json").unwrap();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(false));
        assert!(matches!(
            store.read_global(),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn malformed_local_is_parse_error() {
        let fx = fixture();
        std::fs::write(&fx.paths.local, r#"{"a": {"b": "c"}}"#).unwrap();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(true));
        assert!(matches!(store.read_local(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn write_global_creates_missing_ancestors() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(false));
        let doc: ConfigDocument = [("user", "ada")].into_iter().collect();
        store.write_global(&doc).unwrap();
        assert!(fx.paths.global.is_file());
    }

    #[test]
    fn roundtrip_preserves_mapping() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(true));
        let doc: ConfigDocument = [("zeta", "1"), ("alpha", "two"), ("mid", "")]
            .into_iter()
            .collect();
        store.write_global(&doc).unwrap();
        store.write_local(&doc).unwrap();
        assert_eq!(store.read_global().unwrap(), doc);
        assert_eq!(store.read_local().unwrap(), doc);
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(true));
        store.set(ConfigScope::Local, "k", "v").unwrap();
        let names: Vec<String> = std::fs::read_dir(fx.cwd.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![".gitmorph.json".to_string()]);
    }

    #[test]
    fn local_write_outside_repo_is_refused() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(false));
        let err = store.set(ConfigScope::Local, "k", "v").unwrap_err();
        assert!(matches!(err, ConfigError::NotARepository));
        assert!(!fx.paths.local.exists());
    }

    #[test]
    fn local_write_outside_repo_does_not_modify_existing_file() {
        let fx = fixture();
        std::fs::write(&fx.paths.local, "{\"k\": \"old\"}").unwrap();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(false));
        let doc: ConfigDocument = [("k", "new")].into_iter().collect();
        assert!(store.write_local(&doc).is_err());
        assert_eq!(
            std::fs::read_to_string(&fx.paths.local).unwrap(),
            "{\"k\": \"old\"}"
        );
    }

    #[test]
    fn local_read_outside_repo_is_empty() {
        let fx = fixture();
        std::fs::write(&fx.paths.local, "{\"k\": \"v\"}").unwrap();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(false));
        assert!(store.read_local().unwrap().is_empty());
    }

    #[test]
    fn set_then_view_contains_pair_once() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(false));
        store.set(ConfigScope::Global, "editor", "vim").unwrap();
        store.set(ConfigScope::Global, "editor", "vim").unwrap();
        let view = store.view(ConfigScope::Global).unwrap();
        assert_eq!(view.matches("\"editor\": \"vim\"").count(), 1);
    }

    #[test]
    fn delete_absent_key_keeps_content() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(true));
        store.set(ConfigScope::Global, "a", "1").unwrap();
        let before = store.read_global().unwrap();
        assert!(!store.delete(ConfigScope::Global, "missing").unwrap());
        assert_eq!(store.read_global().unwrap(), before);
    }

    #[test]
    fn delete_present_key() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(true));
        store.set(ConfigScope::Local, "a", "1").unwrap();
        store.set(ConfigScope::Local, "b", "2").unwrap();
        assert!(store.delete(ConfigScope::Local, "a").unwrap());
        let doc = store.read_local().unwrap();
        assert_eq!(doc.get("a"), None);
        assert_eq!(doc.get("b"), Some("2"));
    }

    #[test]
    fn scopes_are_independent() {
        let fx = fixture();
        let store = ConfigStore::new(fx.paths.clone(), FixedRepo(true));
        store.set(ConfigScope::Global, "k", "global").unwrap();
        store.set(ConfigScope::Local, "k", "local").unwrap();
        assert_eq!(store.read_global().unwrap().get("k"), Some("global"));
        assert_eq!(store.read_local().unwrap().get("k"), Some("local"));
    }
}
