//! In-memory user repository.

use crate::traits::UserRepository;
use async_trait::async_trait;
use chrono::Utc;
use inventory_core::{InventoryError, InventoryResult, NewUser, User, UserId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// User repository keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> InventoryResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> InventoryResult<bool> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn create(&self, user: &NewUser) -> InventoryResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(InventoryError::duplicate(format!(
                "Username '{}' already exists",
                user.username
            )));
        }

        let id = i64::try_from(users.len() + 1)
            .map_err(|_| InventoryError::internal("User id overflow"))?;
        let created = User {
            id: UserId(id),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        };
        users.insert(created.username.clone(), created.clone());
        Ok(created)
    }
}
