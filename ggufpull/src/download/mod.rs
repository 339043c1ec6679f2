//! Blob download.
//!
//! This module provides:
//! - Streamed single-file downloads over HTTP (`http`)
//! - Byte-level progress counters and callbacks (`progress`)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ggufpull::config::RegistryConfig;
//! use ggufpull::download::{BlobFetcher, HttpBlobDownloader};
//!
//! let downloader = HttpBlobDownloader::new(&RegistryConfig::default())?;
//! downloader.download(
//!     "https://registry.ollama.ai/v2/library/phi3/blobs/sha256:...",
//!     Path::new("phi3:3.8b.gguf"),
//!     Some(Box::new(|received, total| println!("{} / {}", received, total))),
//! )?;
//! ```

mod http;
mod progress;

pub use http::{BlobFetcher, HttpBlobDownloader};
pub use progress::{DownloadProgress, ProgressCallback};
