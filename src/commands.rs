//! CLI command implementations

use trellis_core::{EditSession, GraphStore, NodeKind};
use trellis_enhance::{create_service, EnhanceConfig, EnhanceEngine, EngineState};
use trellis_ledger::{load_snapshot, publish, HttpLedger, PublishMode};

pub async fn show(ledger_url: String) -> anyhow::Result<()> {
    let ledger = HttpLedger::new(ledger_url);
    let snapshot = load_snapshot(&ledger).await?;

    tracing::info!(
        "Remote tree: {} nodes, {} edges",
        snapshot.nodes.len(),
        snapshot.edges.len()
    );

    for node in &snapshot.nodes {
        let dependents = snapshot.edges.iter().filter(|e| e.target == node.id).count();
        let marker = match node.kind {
            NodeKind::UltimateObjective => " [ultimate objective]",
            NodeKind::EndGoal => " [end goal]",
            NodeKind::Default => "",
        };
        println!(
            "{:>4}  {}{} ({} dependents)",
            node.id,
            node.title.as_deref().unwrap_or("<untitled>"),
            marker,
            dependents
        );
    }

    Ok(())
}

pub async fn enhance(
    ledger_url: String,
    service: String,
    iterations: u32,
    node: Option<String>,
    objective: Option<String>,
    do_publish: bool,
) -> anyhow::Result<()> {
    let ledger = HttpLedger::new(ledger_url);
    let snapshot = load_snapshot(&ledger).await?;
    tracing::info!(
        "Loaded remote tree: {} nodes, {} edges",
        snapshot.nodes.len(),
        snapshot.edges.len()
    );

    let mut session = EditSession::for_snapshot(&snapshot);
    session.objective = objective;
    let mut store = GraphStore::new(snapshot);
    if let Some(node_id) = &node {
        session.set_active_node(node_id, &store.merged());
        if session.active_node().is_none() {
            anyhow::bail!("node {} not found in the remote tree", node_id);
        }
    }

    let (service_name, base_url) = if service == "local" {
        ("local", None)
    } else {
        ("http", Some(service.clone()))
    };
    let service = create_service(service_name, base_url)?;
    tracing::info!("Expansion service: {}", service.name());

    let mut engine = EnhanceEngine::new(service, EnhanceConfig { iterations });
    engine.run(&mut store, &mut session).await;

    match engine.state() {
        EngineState::Completed => {
            let merged = store.merged();
            tracing::info!(
                "Walk completed: {} expansions, tree now {} nodes, {} edges",
                engine.iteration_count(),
                merged.nodes.len(),
                merged.edges.len()
            );
        }
        EngineState::Failed => {
            anyhow::bail!(
                "enhancement failed: {}",
                engine.last_error().unwrap_or("unknown error")
            );
        }
        // start() found nothing to enhance.
        EngineState::Idle => {
            tracing::warn!("Nothing to enhance in the remote tree");
            return Ok(());
        }
        EngineState::Enhancing => unreachable!("run() only returns settled"),
    }

    if do_publish && store.has_updates() {
        publish(&mut store, &ledger, PublishMode::Publish).await;
    }

    Ok(())
}
