//! In-memory identity store
//!
//! Users live in a single `tokio::sync::RwLock`-guarded map. The ledger,
//! graph and connection components borrow the same lock through the
//! crate-private `read()`/`write()` accessors so that their multi-step
//! operations stay atomic with respect to identity checks.

use super::types::User;
use crate::error::{Error, Result};
use crate::ids::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) type UserMap = HashMap<UserId, User>;

/// In-memory store of registered users
pub struct IdentityStore {
    users: Arc<RwLock<UserMap>>,
}

impl IdentityStore {
    /// Create a new empty identity store
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a new user with an empty content list and follow set
    pub async fn register(&self, id: UserId, name: impl Into<String>) -> Result<User> {
        let name = name.into();
        let mut users = self.users.write().await;
        if users.contains_key(&id) {
            tracing::warn!(user = %id, "Rejected registration of existing user");
            return Err(Error::DuplicateIdentity(id));
        }

        let user = User::new(id, name);
        users.insert(id, user.clone());
        tracing::info!(user = %id, name = %user.name, "Registered user");
        Ok(user)
    }

    /// Check whether a user is registered
    pub async fn exists(&self, id: UserId) -> bool {
        self.users.read().await.contains_key(&id)
    }

    /// Snapshot of a user record
    pub async fn get(&self, id: UserId) -> Result<User> {
        self.users
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::UnknownIdentity(id))
    }

    /// All users, ordered by id
    pub async fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    /// Number of registered users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no user has registered yet
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, UserMap> {
        self.users.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, UserMap> {
        self.users.write().await
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a user in an already-locked map
pub(crate) fn require(users: &UserMap, id: UserId) -> Result<&User> {
    users.get(&id).ok_or(Error::UnknownIdentity(id))
}

/// Mutable variant of [`require`]
pub(crate) fn require_mut(users: &mut UserMap, id: UserId) -> Result<&mut User> {
    users.get_mut(&id).ok_or(Error::UnknownIdentity(id))
}
