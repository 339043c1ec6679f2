//! Manifest retrieval over HTTP.

use reqwest::blocking::Client;
use tracing::debug;

use super::manifest::Manifest;
use super::target::ModelTarget;
use crate::config::RegistryConfig;
use crate::error::{PullError, PullResult};

/// Source of model manifests.
pub trait ManifestSource {
    /// Fetch and parse the manifest for `target`.
    fn fetch_manifest(&self, target: &ModelTarget) -> PullResult<Manifest>;
}

/// Fetches manifests from the registry with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpManifestFetcher {
    client: Client,
    base_url: String,
}

impl HttpManifestFetcher {
    /// Create a fetcher using the given configuration.
    ///
    /// The configured timeout bounds the entire request, body included.
    pub fn new(config: &RegistryConfig) -> PullResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PullError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

impl ManifestSource for HttpManifestFetcher {
    fn fetch_manifest(&self, target: &ModelTarget) -> PullResult<Manifest> {
        let url = target.manifest_url(&self.base_url);
        debug!(url = %url, "Fetching manifest");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PullError::manifest(&url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PullError::manifest(
                &url,
                format!("GET request failed with status {}", status),
            ));
        }

        let body = response
            .text()
            .map_err(|e| PullError::manifest(&url, format!("Read error: {}", e)))?;

        let manifest = Manifest::from_json(&body).map_err(|e| PullError::ManifestParse {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        debug!(url = %url, layers = manifest.layers().count(), "Parsed manifest");
        Ok(manifest)
    }
}
