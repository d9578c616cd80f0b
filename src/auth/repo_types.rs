use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// User record in the `users` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,                      // creation-time-derived id
    pub username: String,             // unique
    pub email: String,                // unique, lower-cased
    pub password: String,             // Base64 obfuscation, NOT a hash
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_login: OffsetDateTime,
}
