//! In-memory ledger for tests and offline runs

use crate::client::{EdgeRecord, Ledger, LedgerError, NodeLite, TxReceipt};
use tokio::sync::Mutex;
use trellis_core::{EdgePayload, NodePayload};

/// A recorded `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub nodes: Vec<NodePayload>,
    pub edges: Vec<EdgePayload>,
}

/// Seedable ledger that serves a fixed snapshot and records every
/// submission instead of applying it (the real ledger is eventually
/// consistent too).
#[derive(Debug, Default)]
pub struct MemoryLedger {
    nodes: Vec<NodeLite>,
    edges: Vec<EdgeRecord>,
    submissions: Mutex<Vec<Submission>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        MemoryLedger::default()
    }

    pub fn seeded(nodes: Vec<NodeLite>, edges: Vec<EdgeRecord>) -> Self {
        MemoryLedger {
            nodes,
            edges,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Everything submitted so far, in order.
    pub async fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Ledger for MemoryLedger {
    async fn nodes_lite(&self) -> Result<Vec<NodeLite>, LedgerError> {
        Ok(self.nodes.clone())
    }

    async fn edges(&self) -> Result<Vec<EdgeRecord>, LedgerError> {
        Ok(self.edges.clone())
    }

    async fn submit(
        &self,
        nodes: Vec<NodePayload>,
        edges: Vec<EdgePayload>,
    ) -> Result<TxReceipt, LedgerError> {
        let mut submissions = self.submissions.lock().await;
        submissions.push(Submission { nodes, edges });
        Ok(TxReceipt {
            tx: Some(format!("mem-{}", submissions.len())),
        })
    }
}
