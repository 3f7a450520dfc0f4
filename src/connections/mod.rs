//! Professional connections — directed request/accept state
//!
//! Records are indexed by requester. A target has no view of the requests
//! addressed to it through this module.

pub mod manager;
pub mod types;

pub use manager::ConnectionManager;
pub use types::{ConnectionStatus, ProfessionalConnection};
