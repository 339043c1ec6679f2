//! Pull command - download a model's weights as a `.gguf` file.

use ggufpull::download::BlobFetcher;
use ggufpull::registry::ManifestSource;
use ggufpull::{ModelTarget, Puller, RegistryConfig};
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;
use crate::progress::DownloadBar;

/// Arguments for a pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullArgs {
    pub model_name: String,
    pub model_parameters: String,
}

/// Run the pull command against the default registry.
pub fn run(args: PullArgs, output: &dyn Output) -> Result<(), CliError> {
    let config = RegistryConfig::default();
    let target = ModelTarget::new(args.model_name, args.model_parameters);
    debug!(model = %target, registry = %config.base_url, "Starting pull");

    let puller = Puller::new(config)?;
    execute(&puller, &target, output)
}

/// Resolve `target`, announce the file, download it and report success.
pub fn execute<M, B>(
    puller: &Puller<M, B>,
    target: &ModelTarget,
    output: &dyn Output,
) -> Result<(), CliError>
where
    M: ManifestSource,
    B: BlobFetcher,
{
    let plan = puller.resolve(target)?;

    output.info(&format!("Downloading {}...", plan.filename));

    let bar = DownloadBar::new();
    match puller.download(&plan, Some(bar.callback())) {
        Ok(_) => bar.finish(),
        Err(e) => {
            bar.abandon();
            return Err(e.into());
        }
    }

    output.success(&format!("Download completed: {}", plan.filename));
    Ok(())
}
