//! Error types for pulling models from the registry.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for pull operations.
pub type PullResult<T> = Result<T, PullError>;

/// Broad classification of a [`PullError`].
///
/// Every kind is fatal to a pull; the classification only exists so callers
/// and tests can tell failures apart without matching on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection, timeout or HTTP status failures.
    Transport,
    /// The manifest body could not be parsed.
    Parse,
    /// The manifest has no model layer.
    Semantic,
    /// The blob stream ended short of its announced length.
    Integrity,
    /// The output file could not be written.
    Io,
}

/// Errors that can occur while fetching a manifest or downloading a blob.
#[derive(Debug, Error)]
pub enum PullError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// The manifest request failed at the transport level or returned a
    /// non-success status.
    #[error("Failed to fetch manifest: {reason}")]
    ManifestFetch { url: String, reason: String },

    /// The manifest response was not valid JSON.
    #[error("Invalid JSON response from server.")]
    ManifestParse { url: String, reason: String },

    /// No layer in the manifest carries the model media type.
    #[error("Model digest not found in manifest.")]
    DigestNotFound { media_type: String },

    /// The blob request or body stream failed.
    #[error("Failed to download file: {reason}")]
    BlobDownload { url: String, reason: String },

    /// The blob stream ended before `content-length` bytes arrived.
    #[error("Download incomplete: received {received} of {expected} bytes.")]
    IncompleteDownload {
        path: PathBuf,
        received: u64,
        expected: u64,
    },

    /// Creating or writing the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },
}

impl PullError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ClientBuild(_) | Self::ManifestFetch { .. } | Self::BlobDownload { .. } => {
                ErrorKind::Transport
            }
            Self::ManifestParse { .. } => ErrorKind::Parse,
            Self::DigestNotFound { .. } => ErrorKind::Semantic,
            Self::IncompleteDownload { .. } => ErrorKind::Integrity,
            Self::WriteFailed { .. } => ErrorKind::Io,
        }
    }

    /// Build a transport error for a failed blob request.
    pub(crate) fn blob(url: &str, reason: impl Into<String>) -> Self {
        Self::BlobDownload {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    /// Build a transport error for a failed manifest request.
    pub(crate) fn manifest(url: &str, reason: impl Into<String>) -> Self {
        Self::ManifestFetch {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
