//! Insight ledger — published content and network-wide id uniqueness

pub mod ledger;
pub mod types;

pub use ledger::InsightLedger;
pub use types::Insight;
