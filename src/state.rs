use std::sync::{Arc, Mutex, MutexGuard};

use crate::asset_store::AssetStore;
use crate::config::{AppConfig, StoreLocation};
use crate::error::AppError;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    inventory: Arc<Mutex<AssetStore>>,
}

impl AppState {
    pub fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.store {
            StoreLocation::Memory => Arc::new(MemoryStore::new()),
            StoreLocation::File(path) => Arc::new(FileStore::open(path)?),
        };
        Ok(Self::from_parts(Arc::new(config), AssetStore::new(store)))
    }

    pub fn from_parts(config: Arc<AppConfig>, inventory: AssetStore) -> Self {
        Self {
            config,
            inventory: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Throwaway state backed by memory.
    pub fn in_memory() -> Self {
        let config = AppConfig {
            store: StoreLocation::Memory,
            ..AppConfig::default()
        };
        let inventory = AssetStore::new(Arc::new(MemoryStore::new()));
        Self::from_parts(Arc::new(config), inventory)
    }

    /// Exclusive access to the store for one operation. Never hold the guard
    /// across an await point.
    pub fn inventory(&self) -> Result<MutexGuard<'_, AssetStore>, AppError> {
        self.inventory
            .lock()
            .map_err(|_| AppError::Internal("asset store lock poisoned".into()))
    }
}
