use crate::assets::repo_types::Asset;
use crate::storage::{assets_key, load_json, save_json, KeyValueStore, StorageError};

impl Asset {
    /// Load one user's partition; an absent partition is an empty list.
    pub fn load_for_user(
        store: &dyn KeyValueStore,
        user_id: i64,
    ) -> Result<Vec<Asset>, StorageError> {
        Ok(load_json(store, &assets_key(user_id))?.unwrap_or_default())
    }

    pub fn save_for_user(
        store: &dyn KeyValueStore,
        user_id: i64,
        assets: &[Asset],
    ) -> Result<(), StorageError> {
        save_json(store, &assets_key(user_id), assets)
    }
}
