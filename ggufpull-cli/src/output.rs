//! Colored status lines.

use console::{style, StyledObject};

/// Sink for user-facing status lines.
pub trait Output {
    /// Informational line, e.g. before a download starts.
    fn info(&self, msg: &str);
    /// Success line after a completed download.
    fn success(&self, msg: &str);
    /// Error line for a fatal failure.
    fn error(&self, msg: &str);
}

/// Output writing labeled lines to the terminal.
///
/// Info and success go to stdout, errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    /// Create a new console output.
    pub fn new() -> Self {
        Self
    }
}

fn info_label() -> StyledObject<&'static str> {
    style("[INFO]").cyan()
}

fn success_label() -> StyledObject<&'static str> {
    style("[SUCCESS]").green()
}

fn error_label() -> StyledObject<&'static str> {
    style("[ERROR]").red()
}

/// Format an info line.
pub fn format_info(msg: &str) -> String {
    format!("{} {}", info_label(), msg)
}

/// Format a success line.
pub fn format_success(msg: &str) -> String {
    format!("{} {}", success_label(), msg)
}

/// Format an error line.
pub fn format_error(msg: &str) -> String {
    format!("{} {}", error_label(), msg)
}

impl Output for ConsoleOutput {
    fn info(&self, msg: &str) {
        println!("{}", format_info(msg));
    }

    fn success(&self, msg: &str) {
        println!("{}", format_success(msg));
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn test_labels() {
        assert_eq!(
            strip_ansi_codes(&format_info("Downloading phi3:3.8b.gguf...")),
            "[INFO] Downloading phi3:3.8b.gguf..."
        );
        assert_eq!(
            strip_ansi_codes(&format_success("Download completed: phi3:3.8b.gguf")),
            "[SUCCESS] Download completed: phi3:3.8b.gguf"
        );
        assert_eq!(
            strip_ansi_codes(&format_error("Download incomplete.")),
            "[ERROR] Download incomplete."
        );
    }
}
