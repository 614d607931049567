//! Subtree extraction: the one-hop neighborhood fed to the expansion service

use crate::model::{Subtree, TreeData};

/// Extract the direct parents, direct children, and connecting edges of
/// `node_id` from `graph`.
///
/// An edge records "source depends on target", so edges *from* the node point
/// at its parents (prerequisites) and edges *into* the node come from its
/// children (dependents).
///
/// A `node_id` that does not resolve yields the empty subtree with
/// `subject: None`; callers treat that as "nothing to do", not as a failure.
pub fn extract(node_id: &str, graph: &TreeData, objective: Option<&str>) -> Subtree {
    let Some(subject) = graph.node(node_id) else {
        return Subtree::empty();
    };

    let parent_edges: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| e.source == node_id)
        .cloned()
        .collect();
    let child_edges: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| e.target == node_id)
        .cloned()
        .collect();

    let parent_ids: Vec<&str> = parent_edges.iter().map(|e| e.target.as_str()).collect();
    let child_ids: Vec<&str> = child_edges.iter().map(|e| e.source.as_str()).collect();

    let parents = graph
        .nodes
        .iter()
        .filter(|n| parent_ids.contains(&n.id.as_str()))
        .cloned()
        .collect();
    let children = graph
        .nodes
        .iter()
        .filter(|n| child_ids.contains(&n.id.as_str()))
        .cloned()
        .collect();

    let mut edges = parent_edges;
    edges.extend(child_edges);

    Subtree {
        parents,
        children,
        edges,
        subject: Some(subject.clone()),
        objective: objective.unwrap_or("-").to_string(),
    }
}
