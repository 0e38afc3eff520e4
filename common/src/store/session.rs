use serde_json::Value;

use super::{KeyValueStore, LAST_EMAIL_KEY, TOKEN_KEY, USER_KEY, read_json, write_json};
use crate::model::user::User;

/// The cached credentials: the bearer token and, when readable, the user
/// object stored next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(|user| user.name.as_str()).unwrap_or("")
    }
}

pub struct SessionStore<'a, S> {
    storage: &'a S,
}

impl<'a, S: KeyValueStore> SessionStore<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// `None` when no token is cached.
    pub fn current(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session { token, user: self.user() })
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        read_json(self.storage, USER_KEY)
    }

    pub fn last_email(&self) -> String {
        self.storage.get(LAST_EMAIL_KEY).unwrap_or_default()
    }

    pub fn login(&self, token: &str, user: &User) {
        self.storage.set(TOKEN_KEY, token);
        write_json(self.storage, USER_KEY, user);
        self.storage.set(LAST_EMAIL_KEY, &user.email);
    }

    /// Logout requested by the user: the email is remembered for the next
    /// login and only the token is dropped, so the cart and the cached user
    /// survive.
    pub fn logout(&self) {
        if let Some(user) = self.user() {
            self.storage.set(LAST_EMAIL_KEY, &user.email);
        }
        self.storage.remove(TOKEN_KEY);
    }

    /// Logout forced by the backend rejecting the credentials.
    pub fn force_logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// Overlays a fresh profile on the cached user object, keeping any
    /// cached field the response does not carry.
    pub fn update_user(&self, fresh: &User) {
        let cached: Value = read_json(self.storage, USER_KEY).unwrap_or(Value::Null);
        let merged = match (cached, serde_json::to_value(fresh)) {
            (Value::Object(mut base), Ok(Value::Object(patch))) => {
                base.extend(patch);
                Value::Object(base)
            }
            (_, Ok(value)) => value,
            (base, Err(_)) => base,
        };
        write_json(self.storage, USER_KEY, &merged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::Role;
    use crate::store::memory::MemoryStore;

    fn admin() -> User {
        User {
            id: "u1".into(),
            name: "Rui".into(),
            email: "rui@ebenezer.com".into(),
            role: Role::Admin,
            ..User::default()
        }
    }

    #[test]
    fn login_caches_token_user_and_email() {
        let storage = MemoryStore::default();
        let session = SessionStore::new(&storage);
        session.login("jwt", &admin());
        let current = session.current().unwrap();
        assert_eq!(current.token, "jwt");
        assert!(current.is_admin());
        assert_eq!(session.last_email(), "rui@ebenezer.com");
    }

    #[test]
    fn forced_logout_clears_token_and_user() {
        let storage = MemoryStore::default();
        let session = SessionStore::new(&storage);
        session.login("jwt", &admin());
        session.force_logout();
        assert!(session.current().is_none());
        assert!(session.user().is_none());
        assert_eq!(session.last_email(), "rui@ebenezer.com");
    }

    #[test]
    fn user_logout_keeps_cached_user() {
        let storage = MemoryStore::default();
        let session = SessionStore::new(&storage);
        session.login("jwt", &admin());
        session.logout();
        assert!(session.current().is_none());
        assert!(session.user().is_some());
    }

    #[test]
    fn update_user_keeps_fields_the_response_lacks() {
        let storage = MemoryStore::default();
        storage.set(USER_KEY, r#"{"_id":"u1","name":"Rui","role":"admin","theme":"dark"}"#);
        storage.set(TOKEN_KEY, "jwt");
        let session = SessionStore::new(&storage);
        session.update_user(&User { id: "u1".into(), name: "Rui Lima".into(), role: Role::Admin, ..User::default() });

        let raw: Value = serde_json::from_str(&storage.raw(USER_KEY).unwrap()).unwrap();
        assert_eq!(raw["name"], "Rui Lima");
        assert_eq!(raw["theme"], "dark");
        assert!(session.current().unwrap().is_admin());
    }

    #[test]
    fn empty_token_is_no_session() {
        let storage = MemoryStore::default();
        storage.set(TOKEN_KEY, "");
        assert!(SessionStore::new(&storage).current().is_none());
    }
}
