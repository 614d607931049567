//! HTTP ledger client

use crate::client::{EdgeRecord, Ledger, LedgerError, NodeLite, TxReceipt};
use serde::Serialize;
use trellis_core::{EdgePayload, NodePayload};

/// JSON ledger gateway: `GET {base}/nodes`, `GET {base}/edges`,
/// `POST {base}/update`.
pub struct HttpLedger {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct UpdateRequest {
    nodes: Vec<NodePayload>,
    edges: Vec<EdgePayload>,
}

impl HttpLedger {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        HttpLedger {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl Ledger for HttpLedger {
    async fn nodes_lite(&self) -> Result<Vec<NodeLite>, LedgerError> {
        let response = self.client.get(self.url("nodes")).send().await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::Rejected(body));
        }
        Ok(response.json().await?)
    }

    async fn edges(&self) -> Result<Vec<EdgeRecord>, LedgerError> {
        let response = self.client.get(self.url("edges")).send().await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::Rejected(body));
        }
        Ok(response.json().await?)
    }

    async fn submit(
        &self,
        nodes: Vec<NodePayload>,
        edges: Vec<EdgePayload>,
    ) -> Result<TxReceipt, LedgerError> {
        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "submitting tech tree update"
        );
        let response = self
            .client
            .post(self.url("update"))
            .json(&UpdateRequest { nodes, edges })
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::Rejected(body));
        }
        Ok(response.json().await.unwrap_or_default())
    }
}
