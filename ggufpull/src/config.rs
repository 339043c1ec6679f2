//! Configuration for registry access.

use std::time::Duration;

/// Default registry host.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.ollama.ai";

/// Media type of the layer holding the model weights.
pub const MODEL_MEDIA_TYPE: &str = "application/vnd.ollama.image.model";

/// Default timeout for registry requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Block size used when streaming a blob to disk.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Settings shared by the manifest fetcher and the blob downloader.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Scheme and host of the registry, without a trailing slash.
    pub base_url: String,

    /// Request timeout.
    ///
    /// Applied by the blocking client to sending each request and to each
    /// body read.
    pub timeout: Duration,

    /// Size of each read from the blob body.
    pub block_size: usize,

    /// Layer media type selected from the manifest.
    pub model_media_type: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            block_size: DEFAULT_BLOCK_SIZE,
            model_media_type: MODEL_MEDIA_TYPE.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Create a configuration pointing at the given registry.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Set the registry base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the streaming block size. Zero is raised to one byte.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size.max(1);
        self
    }
}
