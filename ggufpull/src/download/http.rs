//! Streamed HTTP blob downloader.
//!
//! This module provides the blob download path:
//! - One streamed GET per blob, following redirects
//! - Block-by-block writes with progress callbacks
//! - Length check against `content-length` once the stream ends

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_LENGTH;
use reqwest::redirect::Policy;
use tracing::{debug, warn};

use super::progress::{DownloadProgress, ProgressCallback};
use crate::config::RegistryConfig;
use crate::error::{PullError, PullResult};

/// Maximum number of redirects followed for a blob request.
const MAX_REDIRECTS: usize = 10;

/// Downloads a blob from a URL into a local file.
pub trait BlobFetcher {
    /// Download `url` into `dest`, returning the number of bytes written.
    ///
    /// `dest` is created or truncated. On failure any bytes already written
    /// stay on disk.
    fn download(
        &self,
        url: &str,
        dest: &Path,
        on_progress: Option<ProgressCallback>,
    ) -> PullResult<u64>;
}

/// HTTP-based blob downloader.
#[derive(Debug, Clone)]
pub struct HttpBlobDownloader {
    client: Client,
    block_size: usize,
}

impl HttpBlobDownloader {
    /// Create a downloader using the given configuration.
    ///
    /// The blocking client applies the timeout to sending the request and
    /// to each body read, so a stalled stream fails instead of hanging.
    pub fn new(config: &RegistryConfig) -> PullResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| PullError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            block_size: config.block_size.max(1),
        })
    }
}

impl BlobFetcher for HttpBlobDownloader {
    fn download(
        &self,
        url: &str,
        dest: &Path,
        on_progress: Option<ProgressCallback>,
    ) -> PullResult<u64> {
        debug!(url = %url, dest = %dest.display(), "Requesting blob");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| PullError::blob(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PullError::blob(
                url,
                format!("GET request failed with status {}", status),
            ));
        }

        let total_size = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(0);

        debug!(url = %url, total_size, "Streaming blob");

        let progress = stream_to_file(
            response,
            url,
            dest,
            total_size,
            self.block_size,
            on_progress.as_ref(),
        )?;

        check_length(&progress, dest)
    }
}

/// Copy `reader` into a freshly created `dest` in blocks of `block_size`.
///
/// The file is flushed and closed before returning, on success and on error.
pub(crate) fn stream_to_file<R: Read>(
    mut reader: R,
    url: &str,
    dest: &Path,
    total_size: u64,
    block_size: usize,
    on_progress: Option<&ProgressCallback>,
) -> PullResult<DownloadProgress> {
    let file = File::create(dest).map_err(|e| PullError::WriteFailed {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    let mut buffer = vec![0u8; block_size.max(1)];
    let mut progress = DownloadProgress::new(total_size);

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                // Keep what arrived so far on disk.
                writer.flush().ok();
                return Err(PullError::blob(url, format!("Read error: {}", e)));
            }
        };

        writer
            .write_all(&buffer[..bytes_read])
            .map_err(|e| PullError::WriteFailed {
                path: dest.to_path_buf(),
                source: e,
            })?;

        progress.record(bytes_read);
        progress.report(on_progress);
    }

    writer.flush().map_err(|e| PullError::WriteFailed {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(progress)
}

/// Fail when the stream ended short of (or past) its announced length.
pub(crate) fn check_length(progress: &DownloadProgress, dest: &Path) -> PullResult<u64> {
    if progress.is_incomplete() {
        warn!(
            path = %dest.display(),
            received = progress.received,
            expected = progress.total,
            "Blob length mismatch, leaving partial file"
        );
        return Err(PullError::IncompleteDownload {
            path: dest.to_path_buf(),
            received: progress.received,
            expected: progress.total,
        });
    }

    Ok(progress.received)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::{self, Cursor};
    use std::sync::{Arc, Mutex};

    /// Reader that yields `data` and then fails.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            Ok(n)
        }
    }

    #[test]
    fn test_stream_writes_all_blocks_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("blob.gguf");
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();

        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_clone = Arc::clone(&calls);
        let callback: ProgressCallback = Box::new(move |received, total| {
            calls_clone.lock().unwrap().push((received, total));
        });

        let progress = stream_to_file(
            Cursor::new(data.clone()),
            "http://test/blob",
            &dest,
            5000,
            1024,
            Some(&callback),
        )
        .unwrap();

        assert_eq!(progress.received, 5000);
        assert_eq!(std::fs::read(&dest).unwrap(), data);

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![(1024, 5000), (2048, 5000), (3072, 5000), (4096, 5000), (5000, 5000)]
        );
        assert_eq!(check_length(&progress, &dest).unwrap(), 5000);
    }

    #[test]
    fn test_short_stream_is_incomplete_and_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("short.gguf");

        let progress =
            stream_to_file(Cursor::new(vec![7u8; 300]), "u", &dest, 1000, 1024, None).unwrap();
        let err = check_length(&progress, &dest).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Integrity);
        assert_eq!(std::fs::metadata(&dest).unwrap().len(), 300);
    }

    #[test]
    fn test_unknown_length_accepts_any_size() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("unknown.gguf");

        let progress =
            stream_to_file(Cursor::new(vec![1u8; 123]), "u", &dest, 0, 1024, None).unwrap();
        assert_eq!(check_length(&progress, &dest).unwrap(), 123);
    }

    #[test]
    fn test_read_error_is_transport_error_and_keeps_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("broken.gguf");
        let reader = FailingReader {
            data: Cursor::new(vec![9u8; 2500]),
        };

        let err = stream_to_file(reader, "http://test/blob", &dest, 10_000, 1024, None).unwrap_err();

        assert!(matches!(err, PullError::BlobDownload { .. }));
        assert_eq!(std::fs::metadata(&dest).unwrap().len(), 2500);
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("old.gguf");
        std::fs::write(&dest, vec![0u8; 4096]).unwrap();

        stream_to_file(Cursor::new(b"new".to_vec()), "u", &dest, 3, 1024, None).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"new");
    }

    #[test]
    fn test_missing_parent_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("no/such/dir/model.gguf");

        let err = stream_to_file(Cursor::new(vec![1u8; 4]), "u", &dest, 4, 1024, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
