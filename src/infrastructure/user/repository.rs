//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    last_id: i64,
}

impl Table {
    fn username_taken(&self, username: &str, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|u| u.username() == username && Some(u.id()) != except)
    }
}

/// In-memory implementation of UserRepository
///
/// Mirrors the `users` table: IDs come from a monotonically increasing
/// sequence and are never reused, and a duplicate username is rejected as a
/// storage fault the way the unique constraint would reject it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users, assigning IDs in order
    pub fn with_users(users: Vec<NewUser>) -> Self {
        let mut table = Table::default();

        for user in users {
            table.last_id += 1;
            let id = UserId::new(table.last_id);
            table.rows.insert(id, user.with_id(id));
        }

        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.username_taken(&user.username, None) {
            return Err(DomainError::storage(format!(
                "Failed to insert user: username '{}' violates unique constraint",
                user.username
            )));
        }

        table.last_id += 1;
        let id = UserId::new(table.last_id);
        let user = user.with_id(id);
        table.rows.insert(id, user.clone());

        Ok(user)
    }

    async fn select_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn select_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.username() == username).cloned())
    }

    async fn select_all(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn update(&self, user: &User) -> Result<Option<User>, DomainError> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&user.id()) {
            return Ok(None);
        }

        if table.username_taken(user.username(), Some(user.id())) {
            return Err(DomainError::storage(format!(
                "Failed to update user: username '{}' violates unique constraint",
                user.username()
            )));
        }

        table.rows.insert(user.id(), user.clone());

        Ok(Some(user.clone()))
    }
}
