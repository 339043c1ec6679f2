//! Target identity of a pull.

use std::fmt;

/// File extension appended to downloaded model blobs.
pub const OUTPUT_EXTENSION: &str = "gguf";

/// The model being pulled, as supplied on the command line.
///
/// Both parts are used verbatim: they are substituted into registry URLs
/// and into the output filename without escaping or sanitization. A name
/// containing `/` therefore produces a nested output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTarget {
    /// Model name, e.g. `phi3`.
    pub name: String,
    /// Model parameters tag, e.g. `3.8b`.
    pub parameters: String,
}

impl ModelTarget {
    /// Create a new target.
    pub fn new(name: impl Into<String>, parameters: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into(),
        }
    }

    /// URL of this model's manifest under the given registry.
    pub fn manifest_url(&self, base_url: &str) -> String {
        format!(
            "{}/v2/library/{}/manifests/{}",
            base_url, self.name, self.parameters
        )
    }

    /// URL of a blob belonging to this model.
    pub fn blob_url(&self, base_url: &str, digest: &str) -> String {
        format!("{}/v2/library/{}/blobs/{}", base_url, self.name, digest)
    }

    /// Local filename the blob is written to.
    pub fn output_filename(&self) -> String {
        format!("{}.{}", self, OUTPUT_EXTENSION)
    }
}

impl fmt::Display for ModelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.parameters)
    }
}
