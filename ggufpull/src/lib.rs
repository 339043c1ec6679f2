//! ggufpull - Download GGUF model weights from the Ollama registry
//!
//! This library resolves a model's manifest on the registry, picks the
//! layer holding the model weights and streams that blob to a local
//! `{name}:{parameters}.gguf` file.
//!
//! ```ignore
//! use ggufpull::{ModelTarget, Puller, RegistryConfig};
//!
//! let puller = Puller::new(RegistryConfig::default())?;
//! let outcome = puller.pull(&ModelTarget::new("phi3", "3.8b"), None)?;
//! println!("wrote {} bytes to {}", outcome.bytes_written, outcome.plan.filename);
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod pull;
pub mod registry;

pub use config::RegistryConfig;
pub use error::{ErrorKind, PullError, PullResult};
pub use pull::{PullOutcome, PullPlan, Puller};
pub use registry::{Manifest, ModelTarget};
