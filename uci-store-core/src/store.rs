use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::{parse_file, ParseError};
use crate::tree::UciDocument;
use crate::writer::{write_file, WriteError};

/// Errors that can occur while loading or committing a named store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A store file existed but could not be parsed.
    #[error("failed to load store '{store}': {source}")]
    Load {
        store: String,
        #[source]
        source: ParseError,
    },
    /// Buffered mutations could not be flushed to disk.
    #[error("failed to commit store '{store}': {source}")]
    Commit {
        store: String,
        #[source]
        source: WriteError,
    },
}

/// A directory-backed set of named UCI stores with buffered mutations.
///
/// Each store name maps to one file directly under the root directory
/// (`/etc/config/network` style). A store is parsed on first access and the
/// parsed document is cached, so mutations are visible to every later read
/// within the same run but reach disk only when [`DirStore::commit`] flushes
/// that one store. Stores commit independently; there is no cross-store
/// transaction.
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
    cache: HashMap<String, UciDocument>,
}

impl DirStore {
    /// Open a store set rooted at a configuration directory.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    /// The configuration directory this store set reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The on-disk path of a named store.
    pub fn path_of(&self, store: &str) -> PathBuf {
        self.root.join(store)
    }

    /// Load a store, parsing its file on first access. A missing file yields
    /// an empty document; a present but unparsable file is an error.
    pub fn load(&mut self, store: &str) -> Result<&mut UciDocument, StoreError> {
        match self.cache.entry(store.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let path = self.root.join(store);
                let doc = if path.exists() {
                    parse_file(&path).map_err(|source| StoreError::Load {
                        store: store.to_string(),
                        source,
                    })?
                } else {
                    UciDocument::new()
                };
                Ok(entry.insert(doc))
            }
        }
    }

    /// Flush one store's buffered document to disk. Committing a store that
    /// was never loaded is a no-op.
    pub fn commit(&mut self, store: &str) -> Result<(), StoreError> {
        let Some(doc) = self.cache.get(store) else {
            return Ok(());
        };
        write_file(doc, &self.root.join(store)).map_err(|source| StoreError::Commit {
            store: store.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::DirStore;

    #[test]
    fn mutations_are_visible_before_commit_but_not_persisted() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join("network"),
            "config interface 'lan'\n\toption proto 'static'\n",
        )
        .expect("seed");

        let mut stores = DirStore::open(dir.path());
        stores
            .load("network")
            .expect("load")
            .get_mut("lan")
            .expect("lan")
            .set_option("proto", "dhcp");

        // Visible to a subsequent read through the same handle.
        let doc = stores.load("network").expect("reload");
        assert_eq!(doc.get("lan").unwrap().option("proto"), Some("dhcp"));

        // Not yet on disk.
        let on_disk = fs::read_to_string(dir.path().join("network")).expect("read");
        assert!(on_disk.contains("'static'"));

        stores.commit("network").expect("commit");
        let on_disk = fs::read_to_string(dir.path().join("network")).expect("read");
        assert!(on_disk.contains("'dhcp'"));
    }

    #[test]
    fn missing_store_loads_as_empty_document() {
        let dir = tempdir().expect("tempdir");
        let mut stores = DirStore::open(dir.path());
        let doc = stores.load("dualwan").expect("load");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn commit_of_unloaded_store_is_noop() {
        let dir = tempdir().expect("tempdir");
        let mut stores = DirStore::open(dir.path());
        stores.commit("firewall").expect("commit");
        assert!(!dir.path().join("firewall").exists());
    }

    #[test]
    fn unparsable_store_is_a_load_error() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("network"), "option proto 'dhcp'\n").expect("seed");

        let mut stores = DirStore::open(dir.path());
        let err = stores.load("network").expect_err("must fail");
        assert!(err.to_string().contains("failed to load store 'network'"));
    }
}
