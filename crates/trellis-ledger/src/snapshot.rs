//! Snapshot loading: map ledger reads into a tech tree

use crate::client::{Ledger, LedgerError};
use trellis_core::{TreeData, TreeEdge, TreeNode};

/// Read the full remote graph and assign stringified array indices as node
/// and edge ids.
///
/// The indices are an accident of the ledger's storage; once local overlay
/// entries with synthetic ids are mixed in, every consumer must treat these
/// ids as opaque strings, never as array positions.
pub async fn load_snapshot(ledger: &dyn Ledger) -> Result<TreeData, LedgerError> {
    let nodes = ledger
        .nodes_lite()
        .await?
        .into_iter()
        .enumerate()
        .map(|(idx, lite)| TreeNode::with_title(idx.to_string(), lite.title))
        .collect();

    let edges = ledger
        .edges()
        .await?
        .into_iter()
        .enumerate()
        .map(|(idx, record)| TreeEdge::new(idx.to_string(), record.source, record.target))
        .collect();

    Ok(TreeData { nodes, edges })
}
