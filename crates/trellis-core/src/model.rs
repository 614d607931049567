//! Core data structures for the tech tree

use serde::{Deserialize, Serialize};

/// Discriminates what role a node plays in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Ordinary objective/technology node.
    #[default]
    Default,
    /// A terminal goal of a subtree.
    EndGoal,
    /// The single top-level objective of the tree.
    UltimateObjective,
}

/// Funding record attached to a node. Opaque to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingState {
    pub funding_request: u64,
    pub funding_raised: u64,
    pub funders: u32,
}

/// A single node in the tech tree.
///
/// Ids are opaque strings: the ledger assigns them at creation (stringified
/// array index) and local edits synthesize decimal ordinals. A node is a
/// valueless placeholder until a title is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Serialized rich document. Never interpreted by the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        rename = "fundingState",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub funding_state: Option<FundingState>,
}

impl TreeNode {
    pub fn new(id: impl Into<String>) -> Self {
        TreeNode {
            id: id.into(),
            title: None,
            kind: NodeKind::Default,
            content: None,
            funding_state: None,
        }
    }

    pub fn with_title(id: impl Into<String>, title: impl Into<String>) -> Self {
        TreeNode {
            title: Some(title.into()),
            ..TreeNode::new(id)
        }
    }
}

/// A directed dependency edge: `source` depends on `target`, i.e. the target
/// is a prerequisite of the source.
///
/// Endpoints are not validated against the node set; lookups over dangling
/// references resolve to empty results, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl TreeEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        TreeEdge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// An unordered node set plus an unordered edge set.
///
/// No adjacency index is kept; adjacency is recomputed on demand by linear
/// filters over the edge list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeData {
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<TreeEdge>,
}

impl TreeData {
    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Partial node update applied by [`crate::store::GraphStore::update_node`].
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub title: Option<String>,
    pub kind: Option<NodeKind>,
    pub content: Option<String>,
    pub funding_state: Option<FundingState>,
}

impl NodePatch {
    pub fn title(title: impl Into<String>) -> Self {
        NodePatch {
            title: Some(title.into()),
            ..NodePatch::default()
        }
    }

    /// Shallow-merge this patch into a node.
    pub fn apply(&self, node: &mut TreeNode) {
        if let Some(title) = &self.title {
            node.title = Some(title.clone());
        }
        if let Some(kind) = self.kind {
            node.kind = kind;
        }
        if let Some(content) = &self.content {
            node.content = Some(content.clone());
        }
        if let Some(funding_state) = self.funding_state {
            node.funding_state = Some(funding_state);
        }
    }
}

/// One-hop neighborhood of a node: the unit of work for expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtree {
    pub parents: Vec<TreeNode>,
    pub children: Vec<TreeNode>,
    pub edges: Vec<TreeEdge>,
    /// `None` when the requested id no longer resolves — a defined
    /// non-error outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<TreeNode>,
    pub objective: String,
}

impl Subtree {
    /// The empty subtree returned for an unresolvable node id.
    pub fn empty() -> Self {
        Subtree {
            parents: Vec::new(),
            children: Vec::new(),
            edges: Vec::new(),
            subject: None,
            objective: "-".to_string(),
        }
    }
}

/// What the expansion service returns for a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionResponse {
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<TreeEdge>,
    /// `false` means the service had nothing to add; nothing is merged.
    pub expanded: bool,
}
