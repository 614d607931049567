//! Local expansion service for offline walks

use super::ExpansionService;
use anyhow::Result;
use trellis_core::{ExpansionResponse, Subtree, TreeEdge, TreeNode};

/// Offline stand-in for the generation service.
///
/// A subject with no prerequisites yet gets two templated sub-objectives;
/// anything already broken down is left alone. Generated node ids are fresh
/// uuids so they can never collide with ledger or overlay ids.
pub struct LocalExpansion;

impl LocalExpansion {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalExpansion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ExpansionService for LocalExpansion {
    async fn expand(&self, subtree: &Subtree) -> Result<ExpansionResponse> {
        let Some(subject) = &subtree.subject else {
            return Ok(ExpansionResponse {
                nodes: vec![],
                edges: vec![],
                expanded: false,
            });
        };

        let title = subject.title.clone().unwrap_or_default();
        if !subtree.parents.is_empty() || title.is_empty() {
            return Ok(ExpansionResponse {
                nodes: vec![],
                edges: vec![],
                expanded: false,
            });
        }

        let research = TreeNode::with_title(
            uuid::Uuid::new_v4().to_string(),
            format!("Research: {title}"),
        );
        let prototype = TreeNode::with_title(
            uuid::Uuid::new_v4().to_string(),
            format!("Prototype: {title}"),
        );

        // The subject depends on both generated prerequisites. Edge ids are
        // placeholders; the merge resolver renumbers them on integration.
        let edges = vec![
            TreeEdge::new(
                uuid::Uuid::new_v4().to_string(),
                subject.id.clone(),
                research.id.clone(),
            ),
            TreeEdge::new(
                uuid::Uuid::new_v4().to_string(),
                subject.id.clone(),
                prototype.id.clone(),
            ),
        ];

        Ok(ExpansionResponse {
            nodes: vec![research, prototype],
            edges,
            expanded: true,
        })
    }

    fn name(&self) -> &str {
        "Local (templated)"
    }
}
