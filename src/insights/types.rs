//! Insight data types

use crate::ids::{InsightId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A unit of published content. Immutable once published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Network-wide unique identifier
    pub id: InsightId,
    /// Publishing user
    pub author_id: UserId,
    /// Free-form payload
    pub content: String,
    /// Publish timestamp; never earlier than any previously published insight
    pub created_at: DateTime<Utc>,
    /// Ledger-wide publish counter
    pub sequence: u64,
}

impl Insight {
    /// Ordering for feeds: newest first, later publish wins a timestamp tie.
    pub fn recency_cmp(&self, other: &Self) -> Ordering {
        other
            .created_at
            .cmp(&self.created_at)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
