mod error;
mod output;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "changed-tests")]
#[command(bin_name = "changed-tests")]
#[command(version = env!("CHANGED_TESTS_VERSION"))]
#[command(
    about = "Run the tests associated with files changed since a git revision",
    long_about = None
)]
struct Cli {
    /// Path to start repository discovery from (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Configuration file (default: .changed-tests.toml in the repository root)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Print the selected test files instead of running them
    #[arg(long = "list")]
    list: bool,

    /// Revision to diff against, then arguments passed through to the test
    /// runner. A leading flag means no revision was given.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CHANGED_TESTS_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    let request = run::RunRequest {
        path: cli.path,
        config: cli.config,
        list: cli.list,
        args: cli.args,
    };

    match run::run(request) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
