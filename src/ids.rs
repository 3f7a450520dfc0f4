//! Caller-assigned identifiers
//!
//! Both identifiers are plain `u64`s on the wire (`#[serde(transparent)]`)
//! but distinct types in code so a user id can never be passed where an
//! insight id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Network-wide identifier of a published insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for InsightId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for InsightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&UserId(3)).unwrap(), "3");
        let id: InsightId = serde_json::from_str("105").unwrap();
        assert_eq!(id, InsightId(105));
    }

    #[test]
    fn test_ordering_follows_inner_value() {
        let mut ids = vec![InsightId(104), InsightId(101), InsightId(103)];
        ids.sort();
        assert_eq!(ids, vec![InsightId(101), InsightId(103), InsightId(104)]);
    }
}
