use tracing::{debug, warn};

use crate::models::HistoryEntry;
use crate::storage::Storage;

// Storage key holding the serialized list
pub const HISTORY_KEY: &str = "nexus_history";
pub const MAX_HISTORY: usize = 20;

/// Most-recent-first list of past generations, mirrored to storage.
///
/// Entries are unique by id and the list never grows past [`MAX_HISTORY`].
/// Writes are best-effort: a failed persist is logged and the in-memory list
/// stays authoritative.
pub struct HistoryCache<S> {
    storage: S,
    entries: Vec<HistoryEntry>,
}

impl<S: Storage> HistoryCache<S> {
    pub fn open(storage: S) -> Self {
        let mut cache = Self {
            storage,
            entries: Vec::new(),
        };
        cache.load();
        cache
    }

    // Re-read the persisted list; anything unreadable counts as empty
    pub fn load(&mut self) -> &[HistoryEntry] {
        self.entries = match self.storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(MAX_HISTORY);
                    entries
                }
                Err(e) => {
                    warn!("Discarding unreadable history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read history: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} history entries", self.entries.len());
        &self.entries
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn add(&mut self, entry: HistoryEntry) -> &[HistoryEntry] {
        self.entries.retain(|e| e.id != entry.id);
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
        self.persist();
        &self.entries
    }

    pub fn remove(&mut self, id: i64) -> &[HistoryEntry] {
        self.entries.retain(|e| e.id != id);
        self.persist();
        &self.entries
    }

    // Pure lookup, the cache is left untouched
    pub fn restore(&self, id: i64) -> Option<HistoryEntry> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }

    pub fn newest_id(&self) -> Option<i64> {
        self.entries.iter().map(|e| e.id).max()
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize history: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(HISTORY_KEY, &json) {
            warn!("Failed to persist history: {}", e);
        }
    }
}
