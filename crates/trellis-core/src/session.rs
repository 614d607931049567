//! Edit session state: mode, selection, and the tree's objective
//!
//! One session per local editor; passed explicitly into the store and the
//! enhancement engine instead of living in ambient context.

use crate::model::{NodeKind, TreeData};

/// What the editor is currently doing with the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Move,
    Edit,
}

/// Per-session selection and mode state.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    mode: EditMode,
    active_node: Option<String>,
    /// Title of the tree's overall objective, attached to every extracted
    /// subtree.
    pub objective: Option<String>,
}

impl EditSession {
    pub fn new() -> Self {
        EditSession::default()
    }

    /// Bootstrap a session from a fresh snapshot: a tree holding only its
    /// ultimate objective starts out in edit mode with that node selected.
    pub fn for_snapshot(snapshot: &TreeData) -> Self {
        let mut session = EditSession::new();
        if let [only] = snapshot.nodes.as_slice() {
            if only.kind == NodeKind::UltimateObjective {
                session.mode = EditMode::Edit;
                session.active_node = Some(only.id.clone());
            }
        }
        session
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Entering edit mode drops the selection.
    pub fn set_mode(&mut self, mode: EditMode) {
        if mode == EditMode::Edit {
            self.active_node = None;
        }
        self.mode = mode;
    }

    pub fn active_node(&self) -> Option<&str> {
        self.active_node.as_deref()
    }

    /// Select a node by id if it exists in the given graph.
    pub fn set_active_node(&mut self, node_id: &str, graph: &TreeData) {
        self.active_node = graph.node(node_id).map(|n| n.id.clone());
    }

    pub fn clear_active_node(&mut self) {
        self.active_node = None;
    }

    pub fn objective_title(&self) -> &str {
        self.objective.as_deref().unwrap_or("-")
    }
}
