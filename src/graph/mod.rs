//! Follow graph and personalized feeds
//!
//! The follow relation is stored on each [`User`](crate::identity::User)
//! record; this module owns the operations that mutate and traverse it.

pub mod engine;

pub use engine::GraphEngine;
