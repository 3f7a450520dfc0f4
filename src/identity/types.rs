//! User record types

use crate::ids::{InsightId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A registered member of the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Caller-assigned identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Authored insights, in publish order
    pub insights: Vec<InsightId>,
    /// Users whose insights appear in this user's feed
    pub following: BTreeSet<UserId>,
    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(id: UserId, name: String) -> Self {
        Self {
            id,
            name,
            insights: Vec::new(),
            following: BTreeSet::new(),
            registered_at: Utc::now(),
        }
    }

    /// Whether `target` is in this user's follow set
    pub fn is_following(&self, target: UserId) -> bool {
        self.following.contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_empty() {
        let user = User::new(UserId(1), "Financial_Guru".to_string());
        assert_eq!(user.id, UserId(1));
        assert!(user.insights.is_empty());
        assert!(user.following.is_empty());
        assert!(!user.is_following(UserId(2)));
    }

    #[test]
    fn test_user_serialization() {
        let mut user = User::new(UserId(3), "Tech_Investor".to_string());
        user.following.insert(UserId(2));
        user.following.insert(UserId(1));
        user.insights.push(InsightId(103));

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Tech_Investor");
        assert_eq!(json["insights"], serde_json::json!([103]));
        assert_eq!(json["following"], serde_json::json!([1, 2]));
        assert!(json.get("registeredAt").is_some());
    }
}
