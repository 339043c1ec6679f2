//! Registry access: model targets, manifests and the manifest fetcher.
//!
//! A pull starts from a [`ModelTarget`], which names the manifest and blob
//! URLs as well as the local output file. The [`ManifestSource`] trait
//! abstracts how the manifest is obtained; [`HttpManifestFetcher`] is the
//! production implementation backed by a blocking `reqwest` client.

mod fetcher;
mod manifest;
mod target;

pub use fetcher::{HttpManifestFetcher, ManifestSource};
pub use manifest::{Layer, Manifest};
pub use target::ModelTarget;
