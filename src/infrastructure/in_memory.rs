use crate::domain::ports::UserStore;
use crate::domain::user::{Email, User};
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory user store keyed by email.
///
/// Uniqueness is checked and the insert applied under the same write lock, so
/// concurrent creates with one email cannot both succeed.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<BTreeMap<Email, User>>>,
}

impl InMemoryUserStore {
    /// Creates a new, empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.email.clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Snapshot of every stored user, ordered by email.
    pub async fn all_users(&self) -> Vec<User> {
        let users = self.users.read().await;
        users.values().cloned().collect()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AdminError::DuplicateEmail(user.email.to_string()));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
