/// Persisted, deduplicated history of colors picked from the screen.
use anyhow::Result;
use tracing::{debug, info, warn};

use crate::db::KvStore;

/// Storage key holding the history as a JSON array of hex strings.
pub const HISTORY_KEY: &str = "picked-colors";

/// One row of the history as the UI shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub hex: String,
    /// White swatches need a visible outline against a light background.
    pub outlined: bool,
}

pub struct PickHistory<S> {
    entries: Vec<String>,
    visible: bool,
    store: S,
}

impl<S: KvStore> PickHistory<S> {
    /// Loads the history from `store`. Absent or malformed data yields an empty history.
    pub fn load(store: S) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => parse_entries(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to read pick history, starting empty");
                Vec::new()
            }
        };
        debug!(count = entries.len(), "pick history loaded");
        Self {
            visible: !entries.is_empty(),
            entries,
            store,
        }
    }

    /// Appends `hex` unless it is already present. Returns whether the history changed.
    pub fn record_pick(&mut self, hex: &str) -> Result<bool> {
        if self.contains(hex) {
            debug!(hex, "picked color already in history");
            return Ok(false);
        }
        self.entries.push(hex.to_string());
        self.visible = true;
        info!(hex, count = self.entries.len(), "picked color recorded");
        self.save()?;
        Ok(true)
    }

    /// Empties the history, persists the empty list and collapses the panel.
    pub fn clear_all(&mut self) -> Result<()> {
        self.entries.clear();
        self.visible = false;
        info!("pick history cleared");
        self.save()
    }

    fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, &raw)
    }
}

impl<S> PickHistory<S> {
    pub fn render(&self) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .map(|hex| HistoryEntry {
                hex: hex.clone(),
                outlined: hex == "#ffffff",
            })
            .collect()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn contains(&self, hex: &str) -> bool {
        self.entries.iter().any(|entry| entry == hex)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the history panel is expanded.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_entries(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => {
            let mut entries: Vec<String> = Vec::with_capacity(list.len());
            for hex in list {
                if !entries.contains(&hex) {
                    entries.push(hex);
                }
            }
            entries
        }
        Err(err) => {
            warn!(error = %err, "malformed pick history, starting empty");
            Vec::new()
        }
    }
}
