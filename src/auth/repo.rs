use crate::auth::repo_types::User;
use crate::storage::{load_json, save_json, KeyValueStore, StorageError, CURRENT_USER_KEY, USERS_KEY};

impl User {
    /// Every registered user, in registration order.
    pub fn load_all(store: &dyn KeyValueStore) -> Result<Vec<User>, StorageError> {
        Ok(load_json(store, USERS_KEY)?.unwrap_or_default())
    }

    pub fn save_all(store: &dyn KeyValueStore, users: &[User]) -> Result<(), StorageError> {
        save_json(store, USERS_KEY, users)
    }

    /// Find a user by exact username.
    pub fn find_by_username(
        store: &dyn KeyValueStore,
        username: &str,
    ) -> Result<Option<User>, StorageError> {
        Ok(Self::load_all(store)?
            .into_iter()
            .find(|u| u.username == username))
    }

    /// The user held by the active session, if any.
    pub fn current(store: &dyn KeyValueStore) -> Result<Option<User>, StorageError> {
        load_json(store, CURRENT_USER_KEY)
    }

    pub fn set_current(store: &dyn KeyValueStore, user: &User) -> Result<(), StorageError> {
        save_json(store, CURRENT_USER_KEY, user)
    }

    pub fn clear_current(store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.remove(CURRENT_USER_KEY)
    }
}
