//! HTTP expansion service client

use super::ExpansionService;
use anyhow::{Context, Result};
use trellis_core::{ExpansionResponse, Subtree};

/// Remote generation service, spoken to as `POST {base}/enhance-subtree`
/// with the subtree as the JSON body.
pub struct HttpExpansion {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExpansion {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        HttpExpansion {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ExpansionService for HttpExpansion {
    async fn expand(&self, subtree: &Subtree) -> Result<ExpansionResponse> {
        let response = self
            .client
            .post(format!("{}/enhance-subtree", self.base_url))
            .json(subtree)
            .send()
            .await
            .context("Failed to reach the expansion service")?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Expansion service error: {}", error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse expansion response")
    }

    fn name(&self) -> &str {
        "HTTP"
    }
}
