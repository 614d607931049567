//! Merge resolver: folds an expansion delta into the current graph

use crate::model::{TreeData, TreeEdge};

/// Merge an incoming `{nodes, edges}` delta into the current graph.
///
/// Nodes are upserted by id: an incoming node sharing an id with a current
/// node **replaces** it wholesale (no field merge), otherwise it is appended
/// in incoming order. Current ordering is preserved for untouched and
/// replaced entries.
///
/// Incoming edges whose id collides with a current edge are dropped as
/// already applied. The rest are appended with their ids reassigned to
/// `"<current edge count + index among appended>"`, which keeps them unique
/// against everything already present. Dangling endpoints pass through
/// unchanged; validation is the extractor's and renderer's concern.
///
/// Pure and total: never fails, never partially applies.
pub fn merge(current: &TreeData, incoming: &TreeData) -> TreeData {
    let mut nodes = current.nodes.clone();
    for incoming_node in &incoming.nodes {
        match nodes.iter_mut().find(|n| n.id == incoming_node.id) {
            Some(slot) => *slot = incoming_node.clone(),
            None => nodes.push(incoming_node.clone()),
        }
    }

    let edge_count = current.edges.len();
    let mut edges = current.edges.clone();
    let mut appended = 0usize;
    for incoming_edge in &incoming.edges {
        if edges.iter().any(|e| e.id == incoming_edge.id) {
            continue;
        }
        edges.push(TreeEdge {
            id: format!("{}", edge_count + appended),
            ..incoming_edge.clone()
        });
        appended += 1;
    }

    TreeData { nodes, edges }
}
