//! Pull orchestration.
//!
//! A pull runs in two steps, strictly in order:
//!
//! 1. [`Puller::resolve`] fetches the manifest and selects the model digest,
//!    producing a [`PullPlan`].
//! 2. [`Puller::download`] streams the blob named by the plan to disk.
//!
//! Callers that print between the steps (the CLI announces the file before
//! downloading) use the two methods directly; [`Puller::pull`] runs both.

use std::path::PathBuf;

use tracing::info;

use crate::config::RegistryConfig;
use crate::download::{BlobFetcher, HttpBlobDownloader, ProgressCallback};
use crate::error::{PullError, PullResult};
use crate::registry::{HttpManifestFetcher, ManifestSource, ModelTarget};

/// Everything needed to download a model once its manifest is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullPlan {
    /// Model being pulled.
    pub target: ModelTarget,
    /// Digest of the model layer.
    pub digest: String,
    /// Full blob URL.
    pub blob_url: String,
    /// Output filename, `{name}:{parameters}.gguf`.
    pub filename: String,
    /// Output path, the filename joined onto the output directory.
    pub output_path: PathBuf,
}

/// Result of a completed pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullOutcome {
    /// The plan that was executed.
    pub plan: PullPlan,
    /// Bytes written to the output file.
    pub bytes_written: u64,
}

/// Drives manifest resolution and blob download for a model.
#[derive(Debug)]
pub struct Puller<M = HttpManifestFetcher, B = HttpBlobDownloader> {
    manifests: M,
    blobs: B,
    config: RegistryConfig,
    output_dir: PathBuf,
}

impl Puller<HttpManifestFetcher, HttpBlobDownloader> {
    /// Create a puller talking HTTP to the configured registry and writing
    /// into the current directory.
    pub fn new(config: RegistryConfig) -> PullResult<Self> {
        let manifests = HttpManifestFetcher::new(&config)?;
        let blobs = HttpBlobDownloader::new(&config)?;
        Ok(Self::with_sources(config, manifests, blobs))
    }
}

impl<M: ManifestSource, B: BlobFetcher> Puller<M, B> {
    /// Create a puller from explicit manifest and blob sources.
    pub fn with_sources(config: RegistryConfig, manifests: M, blobs: B) -> Self {
        Self {
            manifests,
            blobs,
            config,
            output_dir: PathBuf::from("."),
        }
    }

    /// Write output files under `dir` instead of the current directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Fetch the manifest for `target` and select its model layer.
    pub fn resolve(&self, target: &ModelTarget) -> PullResult<PullPlan> {
        let manifest = self.manifests.fetch_manifest(target)?;

        let digest = manifest
            .find_digest(&self.config.model_media_type)
            .ok_or_else(|| PullError::DigestNotFound {
                media_type: self.config.model_media_type.clone(),
            })?
            .to_string();

        let filename = target.output_filename();
        let plan = PullPlan {
            target: target.clone(),
            blob_url: target.blob_url(&self.config.base_url, &digest),
            output_path: self.output_dir.join(&filename),
            filename,
            digest,
        };

        info!(model = %target, digest = %plan.digest, "Resolved model layer");
        Ok(plan)
    }

    /// Download the blob described by `plan`.
    pub fn download(
        &self,
        plan: &PullPlan,
        on_progress: Option<ProgressCallback>,
    ) -> PullResult<u64> {
        let bytes = self
            .blobs
            .download(&plan.blob_url, &plan.output_path, on_progress)?;

        info!(path = %plan.output_path.display(), bytes, "Download finished");
        Ok(bytes)
    }

    /// Resolve and download `target` in one call.
    pub fn pull(
        &self,
        target: &ModelTarget,
        on_progress: Option<ProgressCallback>,
    ) -> PullResult<PullOutcome> {
        let plan = self.resolve(target)?;
        let bytes_written = self.download(&plan, on_progress)?;
        Ok(PullOutcome {
            plan,
            bytes_written,
        })
    }
}
