//! ggufpull CLI - download a .gguf model file from Ollama's registry.

mod commands;
mod error;
mod logging;
mod output;
mod progress;

use std::process;

use clap::Parser;

use commands::pull::{self, PullArgs};
use output::{ConsoleOutput, Output};

#[derive(Debug, Parser)]
#[command(
    name = "ggufpull",
    version,
    about = "Download a .gguf model file from Ollama's registry",
    after_help = "Example: ggufpull phi3 3.8b"
)]
struct Cli {
    /// The name of the model to download (e.g., phi3)
    model_name: String,

    /// The model parameters to use (e.g., 3.8b)
    model_parameters: String,
}

impl From<Cli> for PullArgs {
    fn from(cli: Cli) -> Self {
        PullArgs {
            model_name: cli.model_name,
            model_parameters: cli.model_parameters,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let output = ConsoleOutput::new();
    if let Err(e) = pull::run(cli.into(), &output) {
        output.error(&e.to_string());
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_two_positionals() {
        let cli = Cli::try_parse_from(["ggufpull", "phi3", "3.8b"]).unwrap();
        let args: PullArgs = cli.into();
        assert_eq!(args.model_name, "phi3");
        assert_eq!(args.model_parameters, "3.8b");
    }

    #[test]
    fn test_both_arguments_required() {
        assert!(Cli::try_parse_from(["ggufpull"]).is_err());
        assert!(Cli::try_parse_from(["ggufpull", "phi3"]).is_err());
        assert!(Cli::try_parse_from(["ggufpull", "phi3", "3.8b", "extra"]).is_err());
    }

    #[test]
    fn test_values_pass_through_unvalidated() {
        let cli = Cli::try_parse_from(["ggufpull", "../x/y", "a/b"]).unwrap();
        assert_eq!(cli.model_name, "../x/y");
        assert_eq!(cli.model_parameters, "a/b");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
