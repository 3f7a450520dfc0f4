//! Identity store — user records and existence checks
//!
//! Every other component validates the identifiers it is handed against
//! this store before touching its own state.

pub mod store;
pub mod types;

pub use store::IdentityStore;
pub use types::User;
