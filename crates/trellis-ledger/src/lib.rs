//! Ledger collaborator for Trellis
//!
//! Read the authoritative tech tree snapshot, submit overlay updates, and
//! drive the publish/reset decision. The ledger itself is external and
//! eventually consistent; this crate only speaks its wire shapes.

pub mod client;
pub mod http;
pub mod memory;
pub mod publish;
pub mod snapshot;


pub use client::{EdgeRecord, Ledger, LedgerError, NodeLite, TxReceipt};
pub use http::HttpLedger;
pub use memory::{MemoryLedger, Submission};
pub use publish::{publish, PublishMode};
pub use snapshot::load_snapshot;
