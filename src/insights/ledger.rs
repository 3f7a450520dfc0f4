//! In-memory insight ledger
//!
//! Publishing holds the identity write lock and the ledger write lock at the
//! same time (always in that order), so the uniqueness check, the insert and
//! the append to the author's sequence happen as one step.

use super::types::Insight;
use crate::error::{Error, Result};
use crate::identity::store::{require, require_mut};
use crate::identity::IdentityStore;
use crate::ids::{InsightId, UserId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

/// Ledger contents guarded by a single lock
#[derive(Default)]
pub(crate) struct LedgerState {
    insights: HashMap<InsightId, Insight>,
    next_sequence: u64,
    last_timestamp: Option<DateTime<Utc>>,
}

impl LedgerState {
    pub(crate) fn get(&self, id: &InsightId) -> Option<&Insight> {
        self.insights.get(id)
    }

    /// Wall clock, clamped so timestamps never run backwards
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let ts = match self.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_timestamp = Some(ts);
        ts
    }
}

/// Store of every published insight in the network
pub struct InsightLedger {
    identity: Arc<IdentityStore>,
    state: Arc<RwLock<LedgerState>>,
}

impl InsightLedger {
    /// Create an empty ledger validating authors against `identity`
    pub fn new(identity: Arc<IdentityStore>) -> Self {
        Self {
            identity,
            state: Arc::new(RwLock::new(LedgerState::default())),
        }
    }

    /// Publish an insight under a network-wide unique id
    pub async fn publish(
        &self,
        author_id: UserId,
        insight_id: InsightId,
        content: impl Into<String>,
    ) -> Result<Insight> {
        let mut users = self.identity.write().await;
        let author = require_mut(&mut users, author_id)?;

        let mut ledger = self.state.write().await;
        if ledger.insights.contains_key(&insight_id) {
            tracing::warn!(insight = %insight_id, author = %author_id, "Rejected duplicate insight id");
            return Err(Error::DuplicateContent(insight_id));
        }

        let created_at = ledger.next_timestamp();
        let sequence = ledger.next_sequence;
        ledger.next_sequence += 1;

        let insight = Insight {
            id: insight_id,
            author_id,
            content: content.into(),
            created_at,
            sequence,
        };
        ledger.insights.insert(insight_id, insight.clone());
        author.insights.push(insight_id);

        tracing::info!(insight = %insight_id, author = %author_id, sequence, "Published insight");
        Ok(insight)
    }

    /// Retrieve a published insight
    pub async fn get(&self, id: InsightId) -> Result<Insight> {
        self.state
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::UnknownContent(id))
    }

    /// All insights by one author, in publish order
    pub async fn insights_by(&self, author_id: UserId) -> Result<Vec<Insight>> {
        let users = self.identity.read().await;
        let author = require(&users, author_id)?;
        let ledger = self.state.read().await;

        Ok(author
            .insights
            .iter()
            .filter_map(|id| ledger.get(id).cloned())
            .collect())
    }

    /// Number of published insights
    pub async fn len(&self) -> usize {
        self.state.read().await.insights.len()
    }

    /// Whether nothing has been published yet
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.insights.is_empty()
    }

    pub(crate) fn identity(&self) -> &Arc<IdentityStore> {
        &self.identity
    }

    /// Callers must already hold the identity lock.
    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().await
    }
}
