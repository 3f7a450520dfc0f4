//! In-memory connection manager
//!
//! Lock order is identity (read) then connections (write), matching the
//! rest of the crate.

use super::types::{ConnectionStatus, ProfessionalConnection};
use crate::error::{Error, Result};
use crate::identity::store::require;
use crate::identity::IdentityStore;
use crate::ids::UserId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Requester -> (target -> record)
type ConnectionIndex = HashMap<UserId, BTreeMap<UserId, ProfessionalConnection>>;

/// Owner of every professional connection record
pub struct ConnectionManager {
    identity: Arc<IdentityStore>,
    connections: Arc<RwLock<ConnectionIndex>>,
}

impl ConnectionManager {
    pub fn new(identity: Arc<IdentityStore>) -> Self {
        Self {
            identity,
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Request a connection from `requester_id` to `target_id`.
    ///
    /// Creates a Pending record on first request. A second request while
    /// Pending is a [`Error::DuplicateRequest`]; once Connected, repeating
    /// the request is a no-op.
    pub async fn connect(&self, requester_id: UserId, target_id: UserId) -> Result<()> {
        let users = self.identity.read().await;
        require(&users, requester_id)?;
        require(&users, target_id)?;
        if requester_id == target_id {
            return Err(Error::SelfConnection(requester_id));
        }

        let mut connections = self.connections.write().await;
        let outgoing = connections.entry(requester_id).or_default();
        match outgoing.get(&target_id).map(|c| c.status) {
            None => {
                outgoing.insert(
                    target_id,
                    ProfessionalConnection::pending(requester_id, target_id),
                );
                tracing::info!(requester = %requester_id, target = %target_id, "Connection requested");
                Ok(())
            }
            Some(ConnectionStatus::Pending) => {
                tracing::warn!(requester = %requester_id, target = %target_id, "Connection request already pending");
                Err(Error::DuplicateRequest {
                    requester: requester_id,
                    target: target_id,
                })
            }
            Some(ConnectionStatus::Connected) => {
                tracing::debug!(requester = %requester_id, target = %target_id, "Already connected");
                Ok(())
            }
        }
    }

    /// Accept the pending request from `requester_id` to `target_id`
    pub async fn accept(
        &self,
        requester_id: UserId,
        target_id: UserId,
    ) -> Result<ProfessionalConnection> {
        let users = self.identity.read().await;
        require(&users, requester_id)?;
        require(&users, target_id)?;

        let mut connections = self.connections.write().await;
        let conn = connections
            .get_mut(&requester_id)
            .and_then(|outgoing| outgoing.get_mut(&target_id))
            .ok_or(Error::NoPendingRequest {
                requester: requester_id,
                target: target_id,
            })?;

        if conn.accept() {
            tracing::info!(requester = %requester_id, target = %target_id, "Connection accepted");
        } else {
            tracing::debug!(requester = %requester_id, target = %target_id, "Connection already accepted");
        }
        Ok(conn.clone())
    }

    /// The record for one ordered pair, if any
    pub async fn connection(
        &self,
        requester_id: UserId,
        target_id: UserId,
    ) -> Option<ProfessionalConnection> {
        self.connections
            .read()
            .await
            .get(&requester_id)
            .and_then(|outgoing| outgoing.get(&target_id))
            .cloned()
    }

    /// Outgoing records of `requester_id`, ordered by target
    pub async fn connections_of(&self, requester_id: UserId) -> Result<Vec<ProfessionalConnection>> {
        let users = self.identity.read().await;
        require(&users, requester_id)?;

        Ok(self
            .connections
            .read()
            .await
            .get(&requester_id)
            .map(|outgoing| outgoing.values().cloned().collect())
            .unwrap_or_default())
    }
}
