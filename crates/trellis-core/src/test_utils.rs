//! Test fixtures for trellis-core

use crate::model::{TreeData, TreeEdge, TreeNode};
use crate::store::GraphStore;

/// Build a graph from `(id, title)` node pairs and `(source, target)` edge
/// pairs; edge ids are assigned positionally, the way a ledger snapshot
/// would.
pub fn tree(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> TreeData {
    TreeData {
        nodes: nodes
            .iter()
            .map(|(id, title)| TreeNode::with_title(*id, *title))
            .collect(),
        edges: edges
            .iter()
            .enumerate()
            .map(|(idx, (source, target))| TreeEdge::new(idx.to_string(), *source, *target))
            .collect(),
    }
}

/// A store over a single-root remote snapshot.
pub fn root_only_store() -> GraphStore {
    GraphStore::new(tree(&[("0", "Root")], &[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_fixture_assigns_positional_edge_ids() {
        let graph = tree(&[("0", "A"), ("1", "B")], &[("1", "0")]);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges[0].id, "0");
        assert_eq!(graph.edges[0].source, "1");
    }
}
