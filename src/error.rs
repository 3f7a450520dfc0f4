//! insightnet error types

use crate::ids::{InsightId, UserId};
use thiserror::Error;

/// insightnet error type
#[derive(Error, Debug)]
pub enum Error {
    /// An operation referenced a user that is not registered
    #[error("Unknown identity: user {0} is not registered")]
    UnknownIdentity(UserId),

    /// Registration with an identifier that is already taken
    #[error("Duplicate identity: user {0} is already registered")]
    DuplicateIdentity(UserId),

    /// Publish with an insight identifier already used anywhere in the network
    #[error("Duplicate content: insight {0} already exists")]
    DuplicateContent(InsightId),

    /// Lookup of an insight that was never published
    #[error("Unknown content: insight {0} does not exist")]
    UnknownContent(InsightId),

    /// A user asked to connect with itself
    #[error("Self connection: user {0} cannot connect to itself")]
    SelfConnection(UserId),

    /// A connection request is already outstanding for this pair
    #[error("Duplicate request: connection {requester} -> {target} is already pending")]
    DuplicateRequest { requester: UserId, target: UserId },

    /// Accept was called for a pair with no connection request
    #[error("No pending request: user {requester} never asked to connect with {target}")]
    NoPendingRequest { requester: UserId, target: UserId },

    /// Self-follow while `graph.allow_self_follow` is off
    #[error("Self follow: user {0} cannot follow itself")]
    SelfFollow(UserId),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Stable machine-readable code for the consuming layer
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownIdentity(_) => "UNKNOWN_IDENTITY",
            Error::DuplicateIdentity(_) => "DUPLICATE_IDENTITY",
            Error::DuplicateContent(_) => "DUPLICATE_CONTENT",
            Error::UnknownContent(_) => "UNKNOWN_CONTENT",
            Error::SelfConnection(_) => "SELF_CONNECTION",
            Error::DuplicateRequest { .. } => "DUPLICATE_REQUEST",
            Error::NoPendingRequest { .. } => "NO_PENDING_REQUEST",
            Error::SelfFollow(_) => "SELF_FOLLOW",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Toml(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the request was invalid given current state.
    ///
    /// Client errors are never transient; retrying the same call against the
    /// same state fails the same way.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Config(_) | Error::Io(_) | Error::Toml(_))
    }
}

/// Result type alias for insightnet operations
pub type Result<T> = std::result::Result<T, Error>;
