//! HTTP provider for a text-embeddings-inference style server.
//!
//! `POST {endpoint}/embed` with `{"inputs": [...], "normalize": true}`,
//! response is one float array per input.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use leansearch_core::errors::{EmbeddingError, LeanSearchResult};
use leansearch_core::traits::IEmbeddingProvider;

const PROVIDER_NAME: &str = "http";

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [String],
    normalize: bool,
}

pub struct HttpProvider {
    client: reqwest::blocking::Client,
    url: String,
    dimensions: usize,
}

impl HttpProvider {
    pub fn new(endpoint: &str, dimensions: usize, timeout: Duration) -> LeanSearchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| failed(format!("client build failed: {e}")))?;
        Ok(Self {
            client,
            url: format!("{}/embed", endpoint.trim_end_matches('/')),
            dimensions,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn failed(reason: String) -> EmbeddingError {
    EmbeddingError::ProviderFailed {
        provider: PROVIDER_NAME.to_string(),
        reason,
    }
}

impl IEmbeddingProvider for HttpProvider {
    fn embed_batch(&self, texts: &[String]) -> LeanSearchResult<Vec<Vec<f32>>> {
        let request = EmbedRequest {
            inputs: texts,
            normalize: true,
        };
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .map_err(|e| failed(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(failed(format!("server returned {status}: {body}")).into());
        }

        let vectors: Vec<Vec<f32>> = response
            .json()
            .map_err(|e| failed(format!("malformed response body: {e}")))?;
        debug!(inputs = texts.len(), "http embedding batch complete");
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}
