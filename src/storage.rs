use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CartItem;

/// Persistence adapter for the cart. Whole-item-list granularity: `save`
/// replaces the previously stored list, `load` returns it as last written.
/// The UI-visibility flag is deliberately not part of this contract.
pub trait CartStorage: Send + Sync {
    fn load(&self) -> anyhow::Result<Vec<CartItem>>;
    fn save(&self, items: &[CartItem]) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct CartSnapshot {
    items: Vec<CartItem>,
    saved_at: DateTime<Utc>,
}

/// Cart persistence in a single named JSON file, the server-side analog of
/// the browser's `cart-storage` local-storage key.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> anyhow::Result<Vec<CartItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let snapshot: CartSnapshot = serde_json::from_str(&raw)?;
        Ok(snapshot.items)
    }

    fn save(&self, items: &[CartItem]) -> anyhow::Result<()> {
        let snapshot = CartSnapshot {
            items: items.to_vec(),
            saved_at: Utc::now(),
        };
        let raw = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<Vec<CartItem>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> anyhow::Result<Vec<CartItem>> {
        let items = self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(items.clone())
    }

    fn save(&self, items: &[CartItem]) -> anyhow::Result<()> {
        let mut stored = self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *stored = items.to_vec();
        Ok(())
    }
}
