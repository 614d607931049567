//! Enhancement engine: breadth-first expansion walk over the tech tree

use std::collections::{HashSet, VecDeque};

use trellis_core::{extract, EditSession, GraphStore, NodeKind, TreeData};

use crate::notify::{LogNotifier, Notifier};
use crate::services::ExpansionService;

/// Where the walk currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Not started, or `start` found nothing to seed.
    #[default]
    Idle,
    /// Walk in progress; exactly one expansion call in flight per step.
    Enhancing,
    /// Walk ended by queue exhaustion or the iteration bound.
    Completed,
    /// The expansion service failed; walk halted, no retry.
    Failed,
}

#[derive(Debug, Clone, Copy)]
pub struct EnhanceConfig {
    /// How many successful expansions one session may perform.
    pub iterations: u32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        EnhanceConfig { iterations: 1 }
    }
}

/// Drives node ids through the expansion service and merges the results.
///
/// The queue is FIFO and deliberately not deduplicated: child discovery can
/// re-enqueue ids that are already queued, and those are processed
/// redundantly. Single-flight is structural — `step` holds `&mut self`
/// across the await, so no second call can overlap it.
pub struct EnhanceEngine {
    service: Box<dyn ExpansionService>,
    notifier: Box<dyn Notifier>,
    config: EnhanceConfig,
    state: EngineState,
    queue: VecDeque<String>,
    iteration_count: u32,
    last_error: Option<String>,
}

impl EnhanceEngine {
    pub fn new(service: Box<dyn ExpansionService>, config: EnhanceConfig) -> Self {
        EnhanceEngine {
            service,
            notifier: Box::new(LogNotifier),
            config,
            state: EngineState::Idle,
            queue: VecDeque::new(),
            iteration_count: 0,
            last_error: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    pub fn queue(&self) -> &VecDeque<String> {
        &self.queue
    }

    /// Set when the walk transitioned to [`EngineState::Failed`].
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Seed the walk: the active node if one is selected, else the first
    /// node that is not the ultimate objective. With no candidate the queue
    /// is cleared and the engine returns to idle.
    pub fn start(&mut self, store: &GraphStore, session: &EditSession) {
        self.iteration_count = 0;
        self.last_error = None;

        let merged = store.merged();
        let seed = match session.active_node() {
            Some(id) => Some(id.to_string()),
            None => merged
                .nodes
                .iter()
                .find(|n| n.kind != NodeKind::UltimateObjective)
                .map(|n| n.id.clone()),
        };

        let Some(seed) = seed else {
            tracing::debug!("no enhanceable node to seed the walk");
            self.queue.clear();
            self.state = EngineState::Idle;
            return;
        };

        tracing::info!(node = %seed, "starting enhancement walk");
        self.queue = VecDeque::from([seed]);
        self.state = EngineState::Enhancing;
    }

    /// Process the head of the queue: one expansion call at most.
    ///
    /// The subtree is extracted from the graph as it stood before the call,
    /// and child discovery reads the same snapshot, so an expansion result
    /// never changes what this step considers the node's neighborhood.
    pub async fn step(&mut self, store: &mut GraphStore, session: &mut EditSession) {
        if self.queue.is_empty() || self.iteration_count >= self.config.iterations {
            self.state = EngineState::Completed;
            if self.iteration_count != 0 {
                self.notifier.success(&format!(
                    "Tree enhancement completed after {} operations.",
                    self.iteration_count
                ));
            }
            return;
        }

        let node_id = self.queue[0].clone();
        let snapshot = store.merged();
        let subtree = extract(&node_id, &snapshot, Some(session.objective_title()));

        // Stale queue entry: the node was removed since it was enqueued.
        if subtree.subject.is_none() {
            self.queue.pop_front();
            return;
        }

        match self.service.expand(&subtree).await {
            Ok(response) => {
                if response.expanded {
                    if session.active_node() == Some(node_id.as_str()) {
                        session.clear_active_node();
                    }

                    let known_ids: HashSet<&str> =
                        snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
                    store.integrate(&TreeData {
                        nodes: response.nodes.clone(),
                        edges: response.edges.clone(),
                    });
                    self.iteration_count += 1;

                    self.queue.pop_front();
                    for node in &response.nodes {
                        if !known_ids.contains(node.id.as_str()) {
                            self.queue.push_back(node.id.clone());
                        }
                    }
                } else {
                    self.queue.pop_front();
                }

                // Re-visit downstream dependents even when nothing
                // expanded, so the walk reaches all originally-connected
                // descendants. Children are the sources of edges pointing
                // at the processed node.
                for edge in snapshot.edges.iter().filter(|e| e.target == node_id) {
                    self.queue.push_back(edge.source.clone());
                }
            }
            Err(err) => {
                tracing::error!(node = %node_id, "expansion call failed: {err:#}");
                self.notifier
                    .error(&format!("Tree enhancement failed: {err}"));
                self.last_error = Some(format!("{err:#}"));
                self.state = EngineState::Failed;
            }
        }
    }

    /// Run the walk to completion or failure: seed, then step while
    /// enhancing. Termination happens inside `step` via the queue and
    /// iteration bounds; failure leaves queue and counter untouched for
    /// inspection.
    pub async fn run(&mut self, store: &mut GraphStore, session: &mut EditSession) {
        self.start(store, session);
        while self.state == EngineState::Enhancing {
            self.step(store, session).await;
        }
    }
}
