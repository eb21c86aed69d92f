//! CLI Adapter.

mod generate;
mod pipeline;

use std::error::Error;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::domain::AppError;

#[derive(Parser, Debug)]
#[command(name = "gfit-config")]
#[command(version)]
#[command(
    about = "Check a GFIT project layout and generate rungfit.bat and suite properties files",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Project config XML file
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Jenkins pipeline for a project config
    #[clap(visible_alias = "p")]
    Pipeline {
        /// Project config XML file
        config: PathBuf,
    },
}

const USAGE: &str = "
    To execute gfit-config, use this command:

        gfit-config <project_config_filename>

    To print the Jenkins pipeline for a project:

        gfit-config pipeline <project_config_filename>
";

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            debug!(error = %e, "rejected command line");
            exit_with_usage();
        }
    };

    let exit_code = match (cli.command, cli.config) {
        (Some(Commands::Pipeline { config }), _) => match pipeline::run_pipeline(&config) {
            Ok(()) => 0,
            Err(e) => {
                report(&e);
                1
            }
        },
        (None, Some(config)) => generate::run_generate(&config),
        (None, None) => exit_with_usage(),
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_with_usage() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}

/// Print the error and its cause chain to stdout.
pub(crate) fn report(err: &AppError) {
    if err.is_config() {
        println!("Error: {err}");
    } else {
        println!("Exception: {err}");
    }
    let mut source = err.source();
    while let Some(cause) = source {
        println!("  caused by: {cause}");
        source = cause.source();
    }
}
