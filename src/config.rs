//! insightnet configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of entries returned by a feed request
pub const DEFAULT_FEED_LIMIT: usize = 10;

/// Main insightnet configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Feed configuration
    #[serde(default)]
    pub feed: FeedConfig,

    /// Follow graph configuration
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Page size used by `feed()` when the caller gives no limit
    pub default_limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_FEED_LIMIT,
        }
    }
}

/// Follow graph configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Accept `follow(a, a)`. On by default for compatibility.
    pub allow_self_follow: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            allow_self_follow: true,
        }
    }
}

impl NetworkConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Default config location (~/.insightnet/config.toml)
    pub fn default_path() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".insightnet")
            .join("config.toml")
    }

    /// Reject values the engine cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.feed.default_limit == 0 {
            return Err(Error::Config(
                "feed.default_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
