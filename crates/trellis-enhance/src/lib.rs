//! Enhancement engine for Trellis
//!
//! Walks the tech tree breadth-first, asks an external expansion service to
//! grow each node's subtree, and merges the results back into the graph
//! store under iteration and queue-exhaustion bounds.

pub mod engine;
pub mod notify;
pub mod services;


pub use engine::{EnhanceConfig, EnhanceEngine, EngineState};
pub use notify::{LogNotifier, Notifier};
pub use services::{create_service, ExpansionService};
