//! HTTP concept store client
//!
//! Talks to a Snowstorm-style terminology server:
//! `POST {host}/{branch}/concepts/search` for lookups and
//! `PUT {host}/browser/{branch}/concepts/bulk` for batch updates.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;

use crate::config::StoreConfig;
use crate::core::concept::{BranchPath, Concept, ConceptId};
use crate::store::{ConceptStore, Page, PageRequest};
use crate::utils::error::{Result, ServiceError};

/// reqwest-backed [`ConceptStore`]
#[derive(Debug, Clone)]
pub struct HttpConceptStore {
    config: StoreConfig,
    http_client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    concept_ids: &'a BTreeSet<ConceptId>,
    offset: usize,
    limit: usize,
}

impl HttpConceptStore {
    /// Build a client with the configured timeouts
    pub fn new(config: StoreConfig) -> Result<Self> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.host.trim_end_matches('/'), path)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if !self.config.index_prefix.is_empty() {
            if let Ok(value) = self.config.index_prefix.parse() {
                headers.insert("X-Index-Prefix", value);
            }
        }
        headers
    }

    async fn check_status(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error response".to_string());
        Err(ServiceError::Store { status, message })
    }
}

#[async_trait]
impl ConceptStore for HttpConceptStore {
    async fn find_concepts(
        &self,
        ids: &BTreeSet<ConceptId>,
        branch: &BranchPath,
        page: PageRequest,
    ) -> Result<Page<Concept>> {
        let url = self.url(&format!("/{}/concepts/search", branch));
        let body = SearchRequest {
            concept_ids: ids,
            offset: page.offset,
            limit: page.limit,
        };

        let response = self
            .http_client
            .post(&url)
            .headers(self.headers())
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<Page<Concept>>().await?)
    }

    async fn submit_update(&self, concepts: &[Concept], branch: &BranchPath) -> Result<()> {
        let url = self.url(&format!("/browser/{}/concepts/bulk", branch));

        let response = self
            .http_client
            .put(&url)
            .headers(self.headers())
            .json(&concepts)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
