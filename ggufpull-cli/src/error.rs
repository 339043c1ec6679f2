//! CLI error type.

use ggufpull::PullError;
use thiserror::Error;

/// Exit status for any failed pull.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Any failure while resolving or downloading a model.
    #[error(transparent)]
    Pull(#[from] PullError),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Every pull failure is fatal and maps to the same code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Pull(_) => FAILURE_EXIT_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_errors_exit_with_one() {
        let err: CliError = PullError::DigestNotFound {
            media_type: "application/vnd.ollama.image.model".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Model digest not found in manifest.");
    }
}
