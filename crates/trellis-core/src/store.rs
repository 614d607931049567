//! Graph store: remote snapshot plus a local overlay of unpublished edits

use crate::merge::merge;
use crate::model::{NodePatch, TreeData, TreeEdge, TreeNode};

/// Why a store mutation was rejected. Reported to the user; the store is
/// left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("can't remove node {node_id}: it still has dependent nodes")]
    HasDependents { node_id: String },
}

/// Flat node mapping submitted to the ledger on publish.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePayload {
    pub title: String,
    pub content_ref: String,
}

/// Flat edge mapping submitted to the ledger on publish.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EdgePayload {
    pub source: String,
    pub target: String,
}

/// The authoritative remote graph snapshot and the local edit overlay.
///
/// Overlay nodes shadow remote nodes of the same id; overlay edges are
/// unioned after the remote edges (edges are immutable once created). The
/// overlay is the source of truth for unpublished work: publish does not
/// clear it, only [`GraphStore::reset`] does.
///
/// All mutations are synchronous and local; the store performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    remote: TreeData,
    overlay_nodes: Vec<TreeNode>,
    overlay_edges: Vec<TreeEdge>,
}

impl GraphStore {
    /// Start a session over a remote snapshot with an empty overlay.
    pub fn new(remote: TreeData) -> Self {
        GraphStore {
            remote,
            overlay_nodes: Vec::new(),
            overlay_edges: Vec::new(),
        }
    }

    /// The effective graph: remote ∪ overlay, overlay winning on node id
    /// collision. Remote ordering is preserved; overlay-new nodes and all
    /// overlay edges are appended.
    pub fn merged(&self) -> TreeData {
        let mut nodes = self.remote.nodes.clone();
        for overlay_node in &self.overlay_nodes {
            match nodes.iter_mut().find(|n| n.id == overlay_node.id) {
                Some(slot) => *slot = overlay_node.clone(),
                None => nodes.push(overlay_node.clone()),
            }
        }

        let mut edges = self.remote.edges.clone();
        edges.extend(self.overlay_edges.iter().cloned());

        TreeData { nodes, edges }
    }

    /// The conventional id for a locally created node: the current merged
    /// node count as a decimal string.
    pub fn next_node_id(&self) -> String {
        self.merged().nodes.len().to_string()
    }

    /// Append a node to the overlay. The caller pre-assigns a fresh id,
    /// conventionally [`GraphStore::next_node_id`]; no uniqueness check is
    /// made here.
    pub fn add_node(&mut self, node: TreeNode) {
        self.overlay_nodes.push(node);
    }

    /// Append a dependency edge (`source` depends on `target`) with a
    /// freshly generated id. Silently does nothing when either endpoint is
    /// missing.
    pub fn add_edge(&mut self, source: Option<&str>, target: Option<&str>) {
        let (Some(source), Some(target)) = (source, target) else {
            return;
        };
        self.overlay_edges.push(TreeEdge {
            id: uuid::Uuid::new_v4().to_string(),
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    /// Remove an overlay node and every overlay edge targeting it.
    ///
    /// Rejected when any overlay edge still has this node as its source:
    /// only leaf nodes on the dependent side may be removed.
    pub fn remove_node(&mut self, node_id: &str) -> Result<(), StoreError> {
        if self.overlay_edges.iter().any(|e| e.source == node_id) {
            return Err(StoreError::HasDependents {
                node_id: node_id.to_string(),
            });
        }

        self.overlay_nodes.retain(|n| n.id != node_id);
        self.overlay_edges.retain(|e| e.target != node_id);
        Ok(())
    }

    /// Shallow-merge `patch` into the node, promoting it into the overlay if
    /// it was remote-only. Returns `false` (and changes nothing) when the id
    /// is absent from the merged view.
    pub fn update_node(&mut self, node_id: &str, patch: &NodePatch) -> bool {
        let merged = self.merged();
        let Some(node) = merged.node(node_id) else {
            return false;
        };

        let mut updated = node.clone();
        patch.apply(&mut updated);

        match self.overlay_nodes.iter_mut().find(|n| n.id == node_id) {
            Some(slot) => *slot = updated,
            None => self.overlay_nodes.push(updated),
        }
        true
    }

    /// Fold an expansion delta into the effective graph via the merge
    /// resolver, rewriting the overlay so that `merged()` afterwards equals
    /// `merge(merged(), delta)`. The remote snapshot is never touched.
    pub fn integrate(&mut self, delta: &TreeData) {
        let merged = merge(&self.merged(), delta);

        // Remote edges are always the untouched prefix of the merged edge
        // list, so everything past them is overlay.
        self.overlay_edges = merged
            .edges
            .into_iter()
            .skip(self.remote.edges.len())
            .collect();

        self.overlay_nodes = merged
            .nodes
            .into_iter()
            .filter(|n| self.remote.node(&n.id) != Some(n))
            .collect();
    }

    /// Discard the entire overlay.
    pub fn reset(&mut self) {
        self.overlay_nodes.clear();
        self.overlay_edges.clear();
        tracing::debug!("overlay reset");
    }

    /// Whether the merged view differs from the remote snapshot. Derived on
    /// demand, never stored.
    pub fn has_updates(&self) -> bool {
        let merged = self.merged();
        merged.nodes != self.remote.nodes || merged.edges != self.remote.edges
    }

    /// The full overlay as flat publish mappings. Publish submits everything
    /// unpublished, not a diff against remote.
    pub fn overlay_payload(&self) -> (Vec<NodePayload>, Vec<EdgePayload>) {
        let nodes = self
            .overlay_nodes
            .iter()
            .map(|n| NodePayload {
                title: n.title.clone().unwrap_or_default(),
                content_ref: n.content.clone().unwrap_or_default(),
            })
            .collect();
        let edges = self
            .overlay_edges
            .iter()
            .map(|e| EdgePayload {
                source: e.source.clone(),
                target: e.target.clone(),
            })
            .collect();
        (nodes, edges)
    }
}
