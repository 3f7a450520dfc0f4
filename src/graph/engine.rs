//! Follow relation and feed aggregation

use crate::config::{FeedConfig, GraphConfig};
use crate::error::{Error, Result};
use crate::identity::store::{require, require_mut};
use crate::ids::{InsightId, UserId};
use crate::insights::{Insight, InsightLedger};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Follow graph operations and feed computation
pub struct GraphEngine {
    ledger: Arc<InsightLedger>,
    graph: GraphConfig,
    feed: FeedConfig,
}

impl GraphEngine {
    pub fn new(ledger: Arc<InsightLedger>, graph: GraphConfig, feed: FeedConfig) -> Self {
        Self {
            ledger,
            graph,
            feed,
        }
    }

    /// Add `target_id` to the follower's follow set. Following twice is a no-op.
    pub async fn follow(&self, follower_id: UserId, target_id: UserId) -> Result<()> {
        let mut users = self.ledger.identity().write().await;
        require(&users, follower_id)?;
        require(&users, target_id)?;

        if follower_id == target_id && !self.graph.allow_self_follow {
            return Err(Error::SelfFollow(follower_id));
        }

        let follower = require_mut(&mut users, follower_id)?;
        if follower.following.insert(target_id) {
            tracing::info!(follower = %follower_id, target = %target_id, "Followed user");
        } else {
            tracing::debug!(follower = %follower_id, target = %target_id, "Already following");
        }
        Ok(())
    }

    /// Remove `target_id` from the follow set. Not following is a no-op.
    pub async fn unfollow(&self, follower_id: UserId, target_id: UserId) -> Result<()> {
        let mut users = self.ledger.identity().write().await;
        require(&users, target_id)?;
        let follower = require_mut(&mut users, follower_id)?;

        if follower.following.remove(&target_id) {
            tracing::info!(follower = %follower_id, target = %target_id, "Unfollowed user");
        }
        Ok(())
    }

    /// Followed user ids, ascending
    pub async fn following(&self, user_id: UserId) -> Result<Vec<UserId>> {
        let users = self.ledger.identity().read().await;
        let user = require(&users, user_id)?;
        Ok(user.following.iter().copied().collect())
    }

    /// Feed with the configured default page size
    pub async fn feed(&self, user_id: UserId) -> Result<Vec<InsightId>> {
        self.feed_with_limit(user_id, self.feed.default_limit).await
    }

    /// The `limit` most recent insights by `user_id` and everyone it follows,
    /// newest first.
    pub async fn feed_with_limit(&self, user_id: UserId, limit: usize) -> Result<Vec<InsightId>> {
        let users = self.ledger.identity().read().await;
        let user = require(&users, user_id)?;
        let ledger = self.ledger.read().await;

        let mut authors: BTreeSet<UserId> = user.following.clone();
        authors.insert(user_id);

        let mut entries: Vec<&Insight> = authors
            .iter()
            .filter_map(|author| users.get(author))
            .flat_map(|author| author.insights.iter())
            .filter_map(|id| ledger.get(id))
            .collect();
        entries.sort_by(|a, b| a.recency_cmp(b));
        entries.truncate(limit);

        tracing::debug!(user = %user_id, authors = authors.len(), returned = entries.len(), "Computed feed");
        Ok(entries.into_iter().map(|i| i.id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdentityStore;

    async fn engine_with_users(ids: &[u64], graph: GraphConfig) -> GraphEngine {
        let identity = Arc::new(IdentityStore::new());
        for id in ids {
            identity
                .register(UserId(*id), format!("user-{}", id))
                .await
                .unwrap();
        }
        let ledger = Arc::new(InsightLedger::new(identity));
        GraphEngine::new(ledger, graph, FeedConfig::default())
    }

    async fn publish(engine: &GraphEngine, author: u64, id: u64) {
        engine
            .ledger
            .publish(UserId(author), InsightId(id), format!("insight {}", id))
            .await
            .unwrap();
    }

    fn ids(raw: &[u64]) -> Vec<InsightId> {
        raw.iter().copied().map(InsightId).collect()
    }

    #[tokio::test]
    async fn test_follow_is_idempotent() {
        let engine = engine_with_users(&[1, 2], GraphConfig::default()).await;
        engine.follow(UserId(1), UserId(2)).await.unwrap();
        let once = engine.following(UserId(1)).await.unwrap();

        engine.follow(UserId(1), UserId(2)).await.unwrap();
        let twice = engine.following(UserId(1)).await.unwrap();

        assert_eq!(once, vec![UserId(2)]);
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_follow_unknown_identity() {
        let engine = engine_with_users(&[1], GraphConfig::default()).await;

        let err = engine.follow(UserId(1), UserId(9)).await.unwrap_err();
        assert!(matches!(err, Error::UnknownIdentity(UserId(9))));

        let err = engine.follow(UserId(9), UserId(1)).await.unwrap_err();
        assert!(matches!(err, Error::UnknownIdentity(UserId(9))));

        assert!(engine.following(UserId(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_self_follow_permitted_by_default() {
        let engine = engine_with_users(&[1], GraphConfig::default()).await;
        engine.follow(UserId(1), UserId(1)).await.unwrap();
        assert_eq!(engine.following(UserId(1)).await.unwrap(), vec![UserId(1)]);

        // Own insights are not duplicated in the feed
        publish(&engine, 1, 10).await;
        assert_eq!(engine.feed(UserId(1)).await.unwrap(), ids(&[10]));
    }

    #[tokio::test]
    async fn test_self_follow_rejected_when_disabled() {
        let config = GraphConfig {
            allow_self_follow: false,
        };
        let engine = engine_with_users(&[1], config).await;
        let err = engine.follow(UserId(1), UserId(1)).await.unwrap_err();
        assert!(matches!(err, Error::SelfFollow(UserId(1))));
        assert!(engine.following(UserId(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unfollow() {
        let engine = engine_with_users(&[1, 2, 3], GraphConfig::default()).await;
        engine.follow(UserId(1), UserId(2)).await.unwrap();
        engine.follow(UserId(1), UserId(3)).await.unwrap();

        engine.unfollow(UserId(1), UserId(2)).await.unwrap();
        assert_eq!(engine.following(UserId(1)).await.unwrap(), vec![UserId(3)]);

        // Not following any more: still fine
        engine.unfollow(UserId(1), UserId(2)).await.unwrap();

        let err = engine.unfollow(UserId(1), UserId(8)).await.unwrap_err();
        assert!(matches!(err, Error::UnknownIdentity(UserId(8))));
    }

    #[tokio::test]
    async fn test_feed_newest_first() {
        let engine = engine_with_users(&[1, 2, 3], GraphConfig::default()).await;
        engine.follow(UserId(3), UserId(1)).await.unwrap();
        engine.follow(UserId(3), UserId(2)).await.unwrap();

        for (author, id) in [(1, 101), (2, 102), (3, 103), (1, 104), (2, 105)] {
            publish(&engine, author, id).await;
        }

        let feed = engine.feed(UserId(3)).await.unwrap();
        assert_eq!(feed, ids(&[105, 104, 103, 102, 101]));
    }

    #[tokio::test]
    async fn test_feed_excludes_unrelated_authors() {
        let engine = engine_with_users(&[1, 2, 3], GraphConfig::default()).await;
        engine.follow(UserId(1), UserId(2)).await.unwrap();

        publish(&engine, 1, 1).await;
        publish(&engine, 2, 2).await;
        publish(&engine, 3, 3).await;

        assert_eq!(engine.feed(UserId(1)).await.unwrap(), ids(&[2, 1]));
        // Following is directional
        assert_eq!(engine.feed(UserId(2)).await.unwrap(), ids(&[2]));
        assert_eq!(engine.feed(UserId(3)).await.unwrap(), ids(&[3]));
    }

    #[tokio::test]
    async fn test_feed_truncates_to_limit() {
        let engine = engine_with_users(&[1, 2], GraphConfig::default()).await;
        engine.follow(UserId(1), UserId(2)).await.unwrap();
        for id in 0..15 {
            publish(&engine, 1 + id % 2, id).await;
        }

        let feed = engine.feed(UserId(1)).await.unwrap();
        assert_eq!(feed.len(), 10);
        assert_eq!(feed, (5..15).rev().map(InsightId).collect::<Vec<_>>());

        let top3 = engine.feed_with_limit(UserId(1), 3).await.unwrap();
        assert_eq!(top3, ids(&[14, 13, 12]));

        assert!(engine.feed_with_limit(UserId(1), 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feed_after_unfollow() {
        let engine = engine_with_users(&[1, 2], GraphConfig::default()).await;
        engine.follow(UserId(1), UserId(2)).await.unwrap();
        publish(&engine, 2, 20).await;
        assert_eq!(engine.feed(UserId(1)).await.unwrap(), ids(&[20]));

        engine.unfollow(UserId(1), UserId(2)).await.unwrap();
        assert!(engine.feed(UserId(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feed_unknown_user() {
        let engine = engine_with_users(&[], GraphConfig::default()).await;
        let err = engine.feed(UserId(3)).await.unwrap_err();
        assert!(matches!(err, Error::UnknownIdentity(UserId(3))));
    }

    #[tokio::test]
    async fn test_feed_empty() {
        let engine = engine_with_users(&[1], GraphConfig::default()).await;
        assert!(engine.feed(UserId(1)).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_feed_reads_while_publishing() {
        let engine = Arc::new(engine_with_users(&[1, 2], GraphConfig::default()).await);
        engine.follow(UserId(2), UserId(1)).await.unwrap();

        let writer = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                for id in 0..200 {
                    publish(&engine, 1, id).await;
                }
            })
        };
        let readers = (0..4).map(|_| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                for _ in 0..50 {
                    let feed = engine.feed_with_limit(UserId(2), 1000).await.unwrap();
                    // A snapshot is always a contiguous newest-first prefix
                    let n = feed.len() as u64;
                    let expected: Vec<InsightId> = (0..n).rev().map(InsightId).collect();
                    assert_eq!(feed, expected);
                }
            })
        });

        writer.await.unwrap();
        for result in futures::future::join_all(readers).await {
            result.unwrap();
        }
        assert_eq!(engine.feed_with_limit(UserId(2), 1000).await.unwrap().len(), 200);
    }
}
