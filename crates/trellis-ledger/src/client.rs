//! Ledger collaborator boundary
//!
//! The ledger is append-only and eventually consistent: reads return the
//! last observed snapshot, writes are acknowledged before they are
//! observable. Confirmation arrives through an event feed outside this
//! crate's scope.

use serde::{Deserialize, Serialize};
use trellis_core::{EdgePayload, NodePayload};

/// A node as the ledger stores it. The array index of the read result is the
/// node's implicit id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLite {
    pub title: String,
}

/// An edge as the ledger stores it. The array index of the read result is
/// the edge's implicit id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
}

/// Acknowledgement of a submitted update. Presence of a transaction handle
/// does not mean the update is observable yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("ledger rejected the submission: {0}")]
    Rejected(String),
}

/// What the core consumes from the remote ledger.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    /// Read all nodes in ledger order.
    async fn nodes_lite(&self) -> Result<Vec<NodeLite>, LedgerError>;

    /// Read all edges in ledger order.
    async fn edges(&self) -> Result<Vec<EdgeRecord>, LedgerError>;

    /// Submit an overlay for inclusion. Fire-and-forget from the caller's
    /// perspective: the receipt is informational only.
    async fn submit(
        &self,
        nodes: Vec<NodePayload>,
        edges: Vec<EdgePayload>,
    ) -> Result<TxReceipt, LedgerError>;
}
