//! Durable local state behind a small key/value abstraction.
//!
//! History and favorites are stored as JSON arrays under fixed keys,
//! mirroring the original web client's local-storage layout. The store is
//! injected into the session state so tests can substitute an in-memory
//! implementation.

mod file;

use crate::app::state::VideoResult;
use anyhow::Result;
use std::collections::HashMap;
use tracing::warn;

pub use file::FileStore;

pub const HISTORY_KEY: &str = "history";
pub const FAVORITES_KEY: &str = "favorites";

/// Minimal key/value persistence interface.
pub trait KvStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a video collection from the store. Absent or malformed data is
/// treated as empty, never surfaced to the user.
pub fn load_videos(store: &dyn KvStore, key: &str) -> Vec<VideoResult> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("failed to read '{}' from store: {:#}", key, e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(videos) => videos,
        Err(e) => {
            warn!("discarding malformed '{}' data: {}", key, e);
            Vec::new()
        }
    }
}

/// Persist a video collection as a JSON array.
pub fn save_videos(store: &mut dyn KvStore, key: &str, videos: &[VideoResult]) -> Result<()> {
    let raw = serde_json::to_string(videos)?;
    store.set(key, &raw)
}
