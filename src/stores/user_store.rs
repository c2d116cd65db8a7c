use crate::models::user::User;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Credential store: one record per account, keyed by lowercase email.
///
/// This is the injected store handle the authenticator consults; handlers
/// never reach for a process-wide singleton.
pub struct UserStore {
    users: DashMap<String, Arc<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: DashMap::with_capacity(capacity),
        }
    }

    /// Add a user. Replaces any existing record with the same email and
    /// returns it.
    pub fn add_user(&self, user: User) -> Option<Arc<User>> {
        let email = user.email.clone();
        self.users.insert(email, Arc::new(user))
    }

    /// Case-insensitive exact-match lookup by email.
    pub fn find_by_email(&self, email: &str) -> Option<Arc<User>> {
        let key = email.trim().to_ascii_lowercase();
        self.users.get(&key).map(|entry| Arc::clone(entry.value()))
    }

    /// Lookup by user id. Linear scan; the store is sized for a small shop.
    pub fn get_by_id(&self, user_id: Uuid) -> Option<Arc<User>> {
        self.users
            .iter()
            .find(|entry| entry.value().id == user_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Remove a user by id. Returns the removed record if it existed.
    pub fn remove_by_id(&self, user_id: Uuid) -> Option<Arc<User>> {
        let email = self.get_by_id(user_id).map(|user| user.email.clone())?;
        self.users.remove(&email).map(|(_, user)| user)
    }

    pub fn list(&self) -> Vec<Arc<User>> {
        self.users
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    fn sample_user(email: &str) -> User {
        User::new(email, "$2b$04$fakehash".to_string(), Role::Client, "Test", None)
    }

    #[test]
    fn test_find_by_email_case_insensitive() {
        let store = UserStore::new();
        store.add_user(sample_user("ana@example.com"));

        assert!(store.find_by_email("ana@example.com").is_some());
        assert!(store.find_by_email("ANA@Example.Com").is_some());
        assert!(store.find_by_email("  ana@example.com ").is_some());
        assert!(store.find_by_email("other@example.com").is_none());
    }

    #[test]
    fn test_add_replaces_same_email() {
        let store = UserStore::new();
        store.add_user(sample_user("ana@example.com"));
        let replaced = store.add_user(sample_user("Ana@Example.com"));

        assert!(replaced.is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_and_remove_by_id() {
        let store = UserStore::new();
        let user = sample_user("ana@example.com");
        let id = user.id;
        store.add_user(user);

        assert!(store.get_by_id(id).is_some());
        assert!(store.remove_by_id(id).is_some());
        assert!(store.get_by_id(id).is_none());
        assert!(store.is_empty());
    }
}
