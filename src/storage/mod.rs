use anyhow::Context;
use std::collections::HashMap;
use std::sync::Mutex;

pub mod record;
pub mod sqlite;

pub use record::{Preset, SelectionRecord};
pub use sqlite::SqliteStore;

/// Option name holding the saved gradient selection.
pub const GRADIENTS_OPTION: &str = "geg_gradients";

/// Generic named-option store. Values are JSON text.
pub trait OptionStore: Send + Sync {
    fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, name: &str, value: &str) -> anyhow::Result<()>;
}

/// In-process store, used by tests and `--memory` servers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    options: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionStore for MemoryStore {
    fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        let options = self
            .options
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        Ok(options.get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> anyhow::Result<()> {
        let mut options = self
            .options
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        options.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the saved selection. A missing or non-object value reads as empty.
pub fn load_selection(store: &dyn OptionStore) -> anyhow::Result<SelectionRecord> {
    let Some(raw) = store.get(GRADIENTS_OPTION)? else {
        return Ok(SelectionRecord::new());
    };
    match serde_json::from_str::<SelectionRecord>(&raw) {
        Ok(record) => Ok(record),
        Err(e) => {
            tracing::warn!("ignoring unreadable {GRADIENTS_OPTION} option: {e}");
            Ok(SelectionRecord::new())
        }
    }
}

/// Replace the saved selection wholesale.
pub fn save_selection(store: &dyn OptionStore, record: &SelectionRecord) -> anyhow::Result<()> {
    let raw = serde_json::to_string(record).context("serialize selection")?;
    store.set(GRADIENTS_OPTION, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_option_reads_empty() {
        let store = MemoryStore::new();
        assert!(load_selection(&store).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_option_reads_empty() {
        let store = MemoryStore::new();
        store.set(GRADIENTS_OPTION, "\"oops\"").unwrap();
        assert!(load_selection(&store).unwrap().is_empty());

        store.set(GRADIENTS_OPTION, "[]").unwrap();
        assert!(load_selection(&store).unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_previous_selection() {
        let store = MemoryStore::new();
        let mut first = SelectionRecord::new();
        first.insert("warm-flame", "Warm Flame", "w");
        first.insert("night-fade", "Night Fade", "n");
        save_selection(&store, &first).unwrap();

        let mut second = SelectionRecord::new();
        second.insert("juicy-peach", "Juicy Peach", "j");
        save_selection(&store, &second).unwrap();

        let loaded = load_selection(&store).unwrap();
        assert_eq!(loaded.slugs(), vec!["juicy-peach"]);
    }

    #[test]
    fn test_empty_selection_is_stored_as_empty_object() {
        let store = MemoryStore::new();
        save_selection(&store, &SelectionRecord::new()).unwrap();
        assert_eq!(store.get(GRADIENTS_OPTION).unwrap().as_deref(), Some("{}"));
    }
}
