//! Integration tests for Trellis
//!
//! These tests verify that the store, ledger, and enhancement engine work
//! together correctly.

use trellis_core::{EditSession, GraphStore, NodePatch, TreeNode};
use trellis_enhance::{create_service, EnhanceConfig, EnhanceEngine, EngineState};
use trellis_ledger::{load_snapshot, publish, EdgeRecord, MemoryLedger, NodeLite, PublishMode};

fn seeded_ledger() -> MemoryLedger {
    MemoryLedger::seeded(
        vec![
            NodeLite {
                title: "Open-source tokamak".to_string(),
            },
            NodeLite {
                title: "Cheap superconductors".to_string(),
            },
        ],
        vec![EdgeRecord {
            source: "0".to_string(),
            target: "1".to_string(),
        }],
    )
}

/// Snapshot loading, local editing, and publish against one ledger.
#[tokio::test]
async fn edit_session_round_trip() {
    let ledger = seeded_ledger();
    let snapshot = load_snapshot(&ledger).await.unwrap();
    let mut store = GraphStore::new(snapshot);
    assert!(!store.has_updates());

    // Add a prerequisite of node 0 and retitle node 1.
    let id = store.next_node_id();
    assert_eq!(id, "2");
    store.add_node(TreeNode::with_title(id.clone(), "Magnet factory"));
    store.add_edge(Some("0"), Some(&id));
    store.update_node("1", &NodePatch::title("REBCO tape at scale"));
    assert!(store.has_updates());

    publish(&mut store, &ledger, PublishMode::Publish).await;

    let submissions = ledger.submissions().await;
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].nodes.len(), 2);
    assert_eq!(submissions[0].nodes[0].title, "Magnet factory");
    assert_eq!(submissions[0].nodes[1].title, "REBCO tape at scale");
    assert_eq!(submissions[0].edges.len(), 1);

    // Fire-and-forget: the overlay survives until reset.
    assert!(store.has_updates());
    publish(&mut store, &ledger, PublishMode::Reset).await;
    assert!(!store.has_updates());
    assert_eq!(ledger.submissions().await.len(), 1);
}

/// A full walk with the offline expansion service growing the tree.
#[tokio::test]
async fn enhancement_walk_grows_and_publishes() {
    let ledger = MemoryLedger::seeded(
        vec![NodeLite {
            title: "Fusion power".to_string(),
        }],
        vec![],
    );
    let snapshot = load_snapshot(&ledger).await.unwrap();
    let mut session = EditSession::for_snapshot(&snapshot);
    let mut store = GraphStore::new(snapshot);

    let service = create_service("local", None).unwrap();
    let mut engine = EnhanceEngine::new(service, EnhanceConfig { iterations: 1 });
    engine.run(&mut store, &mut session).await;

    assert_eq!(engine.state(), EngineState::Completed);
    assert_eq!(engine.iteration_count(), 1);

    let merged = store.merged();
    assert_eq!(merged.nodes.len(), 3);
    assert_eq!(merged.edges.len(), 2);
    // Both generated edges hang off the original subject.
    assert!(merged.edges.iter().all(|e| e.source == "0"));
    assert!(store.has_updates());

    publish(&mut store, &ledger, PublishMode::Publish).await;
    let submissions = ledger.submissions().await;
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].nodes.len(), 2);
    assert_eq!(submissions[0].edges.len(), 2);
}

/// The iteration bound holds across a multi-node tree.
#[tokio::test]
async fn walk_respects_iteration_bound_on_larger_trees() {
    let ledger = MemoryLedger::seeded(
        vec![
            NodeLite {
                title: "Grid-scale storage".to_string(),
            },
            NodeLite {
                title: "Flow batteries".to_string(),
            },
            NodeLite {
                title: "Sodium-ion cells".to_string(),
            },
        ],
        vec![
            EdgeRecord {
                source: "1".to_string(),
                target: "0".to_string(),
            },
            EdgeRecord {
                source: "2".to_string(),
                target: "0".to_string(),
            },
        ],
    );
    let snapshot = load_snapshot(&ledger).await.unwrap();
    let mut session = EditSession::for_snapshot(&snapshot);
    let mut store = GraphStore::new(snapshot);

    let service = create_service("local", None).unwrap();
    let mut engine = EnhanceEngine::new(service, EnhanceConfig { iterations: 2 });
    engine.run(&mut store, &mut session).await;

    assert_eq!(engine.state(), EngineState::Completed);
    assert!(engine.iteration_count() <= 2);
}
