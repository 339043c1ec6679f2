//! Image manifest returned by the registry.

use serde::Deserialize;

/// A model manifest.
///
/// Only the layer list is modelled; other manifest fields such as
/// `schemaVersion` and `config` are ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Ordered layer records. Absent in malformed or empty manifests.
    #[serde(default)]
    pub layers: Option<Vec<Layer>>,
}

/// One content-addressed blob referenced by a manifest.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Layer {
    /// Media type, e.g. `application/vnd.ollama.image.model`.
    #[serde(rename = "mediaType", default)]
    pub media_type: Option<String>,

    /// Content digest in `algorithm:hex` form.
    #[serde(default)]
    pub digest: Option<String>,
}

impl Layer {
    /// Create a layer with both fields present.
    pub fn new(media_type: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            media_type: Some(media_type.into()),
            digest: Some(digest.into()),
        }
    }
}

impl Manifest {
    /// Parse a manifest from a JSON body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Iterate over the layers, yielding nothing when the list is absent.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().flatten()
    }

    /// Digest of the first layer whose media type equals `media_type`.
    ///
    /// The scan stops at the first layer with a matching media type. If that
    /// layer has no digest, or an empty one, the result is `None` even when a
    /// later layer also matches.
    pub fn find_digest(&self, media_type: &str) -> Option<&str> {
        self.layers()
            .find(|layer| layer.media_type.as_deref() == Some(media_type))
            .and_then(|layer| layer.digest.as_deref())
            .filter(|digest| !digest.is_empty())
    }
}
