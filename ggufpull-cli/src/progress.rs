//! Terminal progress bar for blob downloads.

use ggufpull::download::ProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};

/// Bar shown once the blob size is known.
const BAR_TEMPLATE: &str =
    "{percent:>3}%|{bar:40.green}| {bytes}/{total_bytes} [{elapsed_precise}<{eta}, {binary_bytes_per_sec}]";

/// Spinner shown while the size is unknown.
const SPINNER_TEMPLATE: &str = "{spinner:.green} {bytes} [{elapsed_precise}, {binary_bytes_per_sec}]";

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Live download indicator driven by the library's progress callback.
///
/// Starts as a byte-counting spinner and switches to a bar the first time a
/// non-zero total is reported.
#[derive(Debug, Clone)]
pub struct DownloadBar {
    bar: ProgressBar,
}

impl DownloadBar {
    /// Create a new indicator drawing to stderr.
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::no_length())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(spinner_style());
        Self { bar }
    }

    /// Callback updating this indicator with `(received, total)`.
    pub fn callback(&self) -> ProgressCallback {
        let bar = self.bar.clone();
        Box::new(move |received, total| {
            if total > 0 && bar.length() != Some(total) {
                bar.set_length(total);
                bar.set_style(bar_style());
            }
            bar.set_position(received);
        })
    }

    /// Bytes shown so far.
    #[cfg(test)]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Leave the indicator on screen in its final state.
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Stop the indicator after a failed download.
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
