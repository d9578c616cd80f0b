use std::sync::Arc;

use time::OffsetDateTime;

use crate::auth::repo_types::User;
use crate::error::{AppError, AppResult};
use crate::storage::KeyValueStore;

/// Source of "now" for timestamps and creation-time ids.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock truncated to milliseconds, the precision stored timestamps keep.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        now.replace_millisecond(now.millisecond()).unwrap_or(now)
    }
}

/// Users, the active session and per-user asset lists over one key-value store.
///
/// Auth operations live in `auth::services`, asset operations in
/// `assets::services`.
pub struct AssetStore {
    pub(crate) store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    last_id: i64,
}

impl AssetStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            last_id: 0,
        }
    }

    pub(crate) fn kv(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub(crate) fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Millisecond timestamp id, strictly increasing within this process and
    /// never equal to any of `taken`.
    pub(crate) fn next_id(&mut self, now: OffsetDateTime, taken: impl Fn(i64) -> bool) -> i64 {
        let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
        let mut id = millis.max(self.last_id + 1);
        while taken(id) {
            id += 1;
        }
        self.last_id = id;
        id
    }

    /// The session user, or `NotAuthenticated`.
    pub(crate) fn require_user(&self) -> AppResult<User> {
        User::current(self.kv())?.ok_or(AppError::NotAuthenticated)
    }
}
