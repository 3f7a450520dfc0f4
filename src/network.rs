//! Network facade
//!
//! Owns the identity store, insight ledger, graph engine and connection
//! manager, wired to one shared identity store. This is the handle an
//! external service layer holds; share it with `Arc<Network>`.

use crate::config::NetworkConfig;
use crate::connections::{ConnectionManager, ProfessionalConnection};
use crate::error::Result;
use crate::graph::GraphEngine;
use crate::identity::{IdentityStore, User};
use crate::ids::{InsightId, UserId};
use crate::insights::{Insight, InsightLedger};
use std::sync::Arc;

/// The professional network engine
pub struct Network {
    identity: Arc<IdentityStore>,
    ledger: Arc<InsightLedger>,
    graph: GraphEngine,
    connections: ConnectionManager,
}

impl Network {
    /// Create an empty network with the given configuration
    pub fn new(config: NetworkConfig) -> Self {
        let identity = Arc::new(IdentityStore::new());
        let ledger = Arc::new(InsightLedger::new(Arc::clone(&identity)));
        let graph = GraphEngine::new(Arc::clone(&ledger), config.graph, config.feed);
        let connections = ConnectionManager::new(Arc::clone(&identity));

        Self {
            identity,
            ledger,
            graph,
            connections,
        }
    }

    /// Identity store handle
    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    /// Insight ledger handle
    pub fn ledger(&self) -> &InsightLedger {
        &self.ledger
    }

    /// Follow graph and feed engine handle
    pub fn graph(&self) -> &GraphEngine {
        &self.graph
    }

    /// Connection manager handle
    pub fn connections(&self) -> &ConnectionManager {
        &self.connections
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Register a new user
    pub async fn register(&self, user_id: UserId, name: impl Into<String>) -> Result<User> {
        self.identity.register(user_id, name).await
    }

    /// Check whether a user is registered
    pub async fn exists(&self, user_id: UserId) -> bool {
        self.identity.exists(user_id).await
    }

    /// Snapshot of a user record
    pub async fn user(&self, user_id: UserId) -> Result<User> {
        self.identity.get(user_id).await
    }

    // =========================================================================
    // Insights
    // =========================================================================

    /// Publish an insight under a network-wide unique id
    pub async fn publish(
        &self,
        author_id: UserId,
        insight_id: InsightId,
        content: impl Into<String>,
    ) -> Result<Insight> {
        self.ledger.publish(author_id, insight_id, content).await
    }

    /// Retrieve a published insight
    pub async fn insight(&self, insight_id: InsightId) -> Result<Insight> {
        self.ledger.get(insight_id).await
    }

    /// All insights by one author, in publish order
    pub async fn insights_by(&self, author_id: UserId) -> Result<Vec<Insight>> {
        self.ledger.insights_by(author_id).await
    }

    // =========================================================================
    // Graph & feed
    // =========================================================================

    /// Follow a user; following twice is a no-op
    pub async fn follow(&self, follower_id: UserId, target_id: UserId) -> Result<()> {
        self.graph.follow(follower_id, target_id).await
    }

    /// Stop following a user; not following is a no-op
    pub async fn unfollow(&self, follower_id: UserId, target_id: UserId) -> Result<()> {
        self.graph.unfollow(follower_id, target_id).await
    }

    /// Followed user ids, ascending
    pub async fn following(&self, user_id: UserId) -> Result<Vec<UserId>> {
        self.graph.following(user_id).await
    }

    /// Feed with the configured default page size
    pub async fn feed(&self, user_id: UserId) -> Result<Vec<InsightId>> {
        self.graph.feed(user_id).await
    }

    /// The `limit` most recent insights visible to `user_id`
    pub async fn feed_with_limit(&self, user_id: UserId, limit: usize) -> Result<Vec<InsightId>> {
        self.graph.feed_with_limit(user_id, limit).await
    }

    // =========================================================================
    // Connections
    // =========================================================================

    /// Request a professional connection
    pub async fn connect(&self, requester_id: UserId, target_id: UserId) -> Result<()> {
        self.connections.connect(requester_id, target_id).await
    }

    /// Accept the pending request from `requester_id` to `target_id`
    pub async fn accept(
        &self,
        requester_id: UserId,
        target_id: UserId,
    ) -> Result<ProfessionalConnection> {
        self.connections.accept(requester_id, target_id).await
    }

    /// The record for one ordered pair, if any
    pub async fn connection(
        &self,
        requester_id: UserId,
        target_id: UserId,
    ) -> Option<ProfessionalConnection> {
        self.connections.connection(requester_id, target_id).await
    }

    /// Outgoing connection records of `requester_id`, ordered by target
    pub async fn connections_of(&self, requester_id: UserId) -> Result<Vec<ProfessionalConnection>> {
        self.connections.connections_of(requester_id).await
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new(NetworkConfig::default())
    }
}
