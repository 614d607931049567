//! Publish controller: push the overlay to the ledger, or throw it away

use crate::client::Ledger;
use trellis_core::GraphStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishMode {
    /// Discard the overlay without submitting anything.
    Reset,
    /// Submit the entire overlay to the ledger.
    Publish,
}

/// Apply a publish action against the store.
///
/// Publishing is at-most-once and non-blocking: a failed submission is
/// logged and swallowed, the overlay is kept so the user can retry, and
/// nothing waits for ledger confirmation (that arrives via the external
/// event feed). Reset delegates to [`GraphStore::reset`].
pub async fn publish(store: &mut GraphStore, ledger: &dyn Ledger, mode: PublishMode) {
    match mode {
        PublishMode::Reset => store.reset(),
        PublishMode::Publish => {
            let (nodes, edges) = store.overlay_payload();
            tracing::info!(
                nodes = nodes.len(),
                edges = edges.len(),
                "publishing overlay to ledger"
            );
            match ledger.submit(nodes, edges).await {
                Ok(receipt) => {
                    tracing::info!(tx = ?receipt.tx, "tech tree update submitted");
                }
                Err(err) => {
                    tracing::error!("tech tree submission failed: {err}");
                }
            }
        }
    }
}
