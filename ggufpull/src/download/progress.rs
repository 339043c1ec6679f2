//! Byte-level progress tracking for a single blob download.

/// Progress callback invoked after every block.
///
/// # Arguments
///
/// * `received` - Bytes written so far
/// * `total` - Expected bytes from `content-length`, or 0 when unknown
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Counters for one download call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadProgress {
    /// Bytes received and written so far.
    pub received: u64,
    /// Total expected size. Zero means unknown.
    pub total: u64,
}

impl DownloadProgress {
    /// Start tracking a download of `total` bytes.
    pub fn new(total: u64) -> Self {
        Self { received: 0, total }
    }

    /// Advance the received counter by one block.
    pub fn record(&mut self, bytes: usize) {
        self.received += bytes as u64;
    }

    /// Whether the expected size is known.
    pub fn has_total(&self) -> bool {
        self.total != 0
    }

    /// A download is incomplete when a size was announced and the byte
    /// count does not match it.
    pub fn is_incomplete(&self) -> bool {
        self.has_total() && self.received != self.total
    }

    /// Notify `callback` of the current counters.
    pub fn report(&self, callback: Option<&ProgressCallback>) {
        if let Some(cb) = callback {
            cb(self.received, self.total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_progress_new() {
        let progress = DownloadProgress::new(2048);
        assert_eq!(progress.received, 0);
        assert_eq!(progress.total, 2048);
        assert!(progress.is_incomplete());
    }

    #[test]
    fn test_progress_complete() {
        let mut progress = DownloadProgress::new(2048);
        progress.record(1024);
        assert!(progress.is_incomplete());
        progress.record(1024);
        assert!(!progress.is_incomplete());
    }

    #[test]
    fn test_unknown_total_is_never_incomplete() {
        let mut progress = DownloadProgress::new(0);
        assert!(!progress.is_incomplete());
        progress.record(77);
        assert!(!progress.is_incomplete());
        assert!(!progress.has_total());
    }

    #[test]
    fn test_overrun_is_incomplete() {
        let mut progress = DownloadProgress::new(10);
        progress.record(11);
        assert!(progress.is_incomplete());
    }

    #[test]
    fn test_report_invokes_callback() {
        let seen = Arc::new(AtomicU64::new(0));
        let seen_clone = Arc::clone(&seen);
        let callback: ProgressCallback = Box::new(move |received, _total| {
            seen_clone.store(received, Ordering::SeqCst);
        });

        let mut progress = DownloadProgress::new(100);
        progress.record(42);
        progress.report(Some(&callback));
        progress.report(None);

        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }
}
