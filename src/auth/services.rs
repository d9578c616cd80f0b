use tracing::{info, warn};

use crate::asset_store::AssetStore;
use crate::assets::repo_types::Asset;
use crate::auth::dto::UserInfo;
use crate::auth::password::{is_valid_email, obfuscate_password, password_matches};
use crate::auth::repo_types::User;
use crate::error::{AppError, AppResult};

impl AssetStore {
    /// Create an account. Does not log the new user in.
    pub fn register(&mut self, username: &str, email: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        let email = email.trim().to_lowercase();

        if username.is_empty() {
            return Err(AppError::validation("Please enter a username!"));
        }
        if !is_valid_email(&email) {
            warn!(email = %email, "invalid email");
            return Err(AppError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(AppError::validation("Please enter a password!"));
        }

        let mut users = User::load_all(self.kv())?;
        if users.iter().any(|u| u.username == username) {
            warn!(username = %username, "username already registered");
            return Err(AppError::DuplicateUsername);
        }
        if users.iter().any(|u| u.email == email) {
            warn!(email = %email, "email already registered");
            return Err(AppError::DuplicateEmail);
        }

        let now = self.now();
        let id = self.next_id(now, |candidate| users.iter().any(|u| u.id == candidate));
        let user = User {
            id,
            username: username.to_string(),
            email,
            password: obfuscate_password(password),
            created_at: now,
            last_login: now,
        };

        users.push(user.clone());
        User::save_all(self.kv(), &users)?;

        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Check credentials, stamp `lastLogin` and make the user the session.
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        let mut users = User::load_all(self.kv())?;

        let Some(user) = users
            .iter_mut()
            .find(|u| u.username == username && password_matches(password, &u.password))
        else {
            warn!(username = %username, "login rejected");
            return Err(AppError::InvalidCredentials);
        };

        user.last_login = self.now();
        let user = user.clone();
        User::save_all(self.kv(), &users)?;
        User::set_current(self.kv(), &user)?;

        info!(user_id = user.id, username = %user.username, "user logged in");
        Ok(user)
    }

    pub fn logout(&mut self) -> AppResult<()> {
        if let Some(user) = User::current(self.kv())? {
            info!(user_id = user.id, "user logged out");
        }
        User::clear_current(self.kv())?;
        Ok(())
    }

    /// Session restored from the store, if one is active.
    pub fn current_user(&self) -> AppResult<Option<User>> {
        Ok(User::current(self.kv())?)
    }

    pub fn user_info(&self) -> AppResult<UserInfo> {
        let user = self.require_user()?;
        let asset_count = Asset::load_for_user(self.kv(), user.id)?.len();
        Ok(UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            last_login: user.last_login,
            asset_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::asset_store::test_support::memory_store;
    use crate::auth::repo_types::User;
    use crate::error::AppError;

    #[test]
    fn second_registration_with_same_username_fails() {
        let mut store = memory_store();
        store.register("ada", "ada@example.com", "pw").unwrap();

        let err = store
            .register("ada", "other@example.com", "pw2")
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername));
        assert_eq!(User::load_all(store.kv()).unwrap().len(), 1);
    }

    #[test]
    fn second_registration_with_same_email_fails() {
        let mut store = memory_store();
        store.register("ada", "ada@example.com", "pw").unwrap();

        let err = store
            .register("grace", " ADA@example.com ", "pw")
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
    }

    #[test]
    fn registration_validates_input() {
        let mut store = memory_store();
        assert!(matches!(
            store.register("  ", "a@b.io", "pw"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.register("ada", "not-an-email", "pw"),
            Err(AppError::InvalidEmail)
        ));
        assert!(matches!(
            store.register("ada", "a@b.io", ""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn registration_stores_obfuscated_password_and_no_session() {
        let mut store = memory_store();
        let user = store.register("ada", "ada@example.com", "secret").unwrap();

        assert_eq!(user.password, "c2VjcmV0");
        assert!(store.current_user().unwrap().is_none());
    }

    #[test]
    fn login_updates_last_login_and_opens_session() {
        let mut store = memory_store();
        let registered = store.register("ada", "ada@example.com", "secret").unwrap();

        let logged_in = store.login("ada", "secret").unwrap();
        assert!(logged_in.last_login > registered.last_login);
        assert_eq!(logged_in.created_at, registered.created_at);

        let session = store.current_user().unwrap().expect("session");
        assert_eq!(session, logged_in);

        let persisted = User::find_by_username(store.kv(), "ada").unwrap().unwrap();
        assert_eq!(persisted.last_login, logged_in.last_login);
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let mut store = memory_store();
        store.register("ada", "ada@example.com", "secret").unwrap();

        assert!(matches!(
            store.login("ada", "Secret"),
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            store.login("nobody", "secret"),
            Err(AppError::InvalidCredentials)
        ));
        assert!(store.current_user().unwrap().is_none());
    }

    #[test]
    fn logout_clears_session_and_is_idempotent() {
        let mut store = memory_store();
        store.register("ada", "ada@example.com", "secret").unwrap();
        store.login("ada", "secret").unwrap();

        store.logout().unwrap();
        assert!(store.current_user().unwrap().is_none());
        store.logout().unwrap();
        assert!(matches!(store.user_info(), Err(AppError::NotAuthenticated)));
    }

    #[test]
    fn user_info_reports_profile() {
        let mut store = memory_store();
        let user = store.register("ada", "ada@example.com", "secret").unwrap();
        store.login("ada", "secret").unwrap();

        let info = store.user_info().unwrap();
        assert_eq!(info.id, user.id);
        assert_eq!(info.username, "ada");
        assert_eq!(info.asset_count, 0);
    }
}
