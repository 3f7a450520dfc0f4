//! Connection record types

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a connection request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Requested, not yet accepted
    Pending,
    /// Accepted
    Connected,
}

/// A directed professional connection between two users.
///
/// Identity is the `(requester_id, target_id)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalConnection {
    pub requester_id: UserId,
    pub target_id: UserId,
    pub status: ConnectionStatus,
    pub requested_at: DateTime<Utc>,
    /// Set when the request is accepted
    pub connected_at: Option<DateTime<Utc>>,
}

impl ProfessionalConnection {
    pub(crate) fn pending(requester_id: UserId, target_id: UserId) -> Self {
        Self {
            requester_id,
            target_id,
            status: ConnectionStatus::Pending,
            requested_at: Utc::now(),
            connected_at: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Pending -> Connected. Returns false if already connected.
    pub(crate) fn accept(&mut self) -> bool {
        match self.status {
            ConnectionStatus::Pending => {
                self.status = ConnectionStatus::Connected;
                self.connected_at = Some(Utc::now());
                true
            }
            ConnectionStatus::Connected => false,
        }
    }
}
