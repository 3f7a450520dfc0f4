//! insightnet - In-memory engine for a professional social network
//!
//! Users publish insights, follow one another and exchange professional
//! connection requests. Everything lives in memory; persistence, transport
//! and authentication belong to the service layer that embeds this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Network                           │
//! │  ┌───────────────────┐          ┌──────────────────────┐  │
//! │  │   Graph & Feed    │          │  Connection Manager  │  │
//! │  │  follow / feed    │          │  connect / accept    │  │
//! │  └─────────┬─────────┘          └──────────┬───────────┘  │
//! │  ┌─────────▼─────────┐                     │              │
//! │  │  Insight Ledger   │                     │              │
//! │  │  publish (unique) │                     │              │
//! │  └─────────┬─────────┘                     │              │
//! │  ┌─────────▼───────────────────────────────▼───────────┐  │
//! │  │                  Identity Store                     │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are always taken identity -> ledger -> connections, so multi-step
//! operations such as `publish` are atomic and readers see consistent
//! snapshots.
//!
//! ## Modules
//!
//! - [`identity`]: user records and existence checks
//! - [`insights`]: published content with network-wide unique ids
//! - [`graph`]: follow relation and recency-ordered feeds
//! - [`connections`]: Pending/Connected professional connections
//! - [`network`]: facade owning all four components
//! - [`config`]: configuration management

pub mod config;
pub mod connections;
pub mod error;
pub mod graph;
pub mod identity;
pub mod ids;
pub mod insights;
pub mod network;

pub use config::NetworkConfig;
pub use error::{Error, Result};
pub use ids::{InsightId, UserId};
pub use network::Network;
