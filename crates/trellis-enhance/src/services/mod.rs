//! Expansion service implementations

pub mod http;
pub mod local;

use anyhow::Result;
use trellis_core::{ExpansionResponse, Subtree};

/// The external generation service: given a one-hop subtree, maybe return
/// additional nodes and edges to merge in.
#[async_trait::async_trait]
pub trait ExpansionService: Send + Sync {
    async fn expand(&self, subtree: &Subtree) -> Result<ExpansionResponse>;

    fn name(&self) -> &str;
}

/// Factory for expansion services.
pub fn create_service(name: &str, base_url: Option<String>) -> Result<Box<dyn ExpansionService>> {
    match name {
        "http" => {
            let base_url =
                base_url.ok_or_else(|| anyhow::anyhow!("http expansion service needs a URL"))?;
            Ok(Box::new(http::HttpExpansion::new(base_url)))
        }
        "local" => Ok(Box::new(local::LocalExpansion::new())),
        _ => anyhow::bail!("Unknown expansion service: {}", name),
    }
}
