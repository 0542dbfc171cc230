use std::path::PathBuf;
use std::process::ExitCode;

use changed_tests_config::load_config;
use changed_tests_core::InvocationArgs;
use changed_tests_operations::operations::{
    ResolveInput, ResolveRevisionOperation, RunInput, RunOperation, RunOutcome, SelectInput,
    SelectOperation,
};
use changed_tests_operations::providers::{FileSystemProbe, Git2Provider, ProcessTestRunner};
use changed_tests_operations::traits::GitProvider;
use tracing::debug;

use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) struct RunRequest {
    pub(crate) path: Option<PathBuf>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) list: bool,
    pub(crate) args: Vec<String>,
}

pub(crate) fn run(request: RunRequest) -> Result<ExitCode> {
    let start_path = resolve_start_path(request.path)?;
    let repo_root = Git2Provider::new().repository_root(&start_path)?;
    debug!(root = %repo_root.display(), "repository discovered");

    let config = load_config(&repo_root, request.config.as_deref())?;
    let invocation = InvocationArgs::parse(request.args);
    let formatter = PlainTextFormatter;

    let resolved = ResolveRevisionOperation::new(Git2Provider::new()).execute(
        &repo_root,
        &ResolveInput {
            requested: invocation.revision.as_deref(),
            defaults: config.default_revisions(),
        },
    )?;
    eprintln!("{}", formatter.format_comparison(&resolved));

    let selected = SelectOperation::new(Git2Provider::new(), FileSystemProbe).execute(
        &repo_root,
        &SelectInput {
            compare_to: resolved.compare_to(),
            rules: config.selection_rules(),
        },
    )?;
    eprintln!("{}", formatter.format_found(&selected.selection));

    if request.list {
        print!("{}", formatter.format_selection(&selected.selection));
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = RunOperation::new(Git2Provider::new(), ProcessTestRunner).execute(RunInput {
        repo_root: &repo_root,
        files: selected.selection.files(),
        runner: config.runner(),
        runner_args: &invocation.runner_args,
        seed_env: config.seed_env(),
        existing_seed: std::env::var(config.seed_env()).ok(),
        extra_env: config
            .env()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    })?;

    Ok(match outcome {
        RunOutcome::NothingToRun => ExitCode::SUCCESS,
        RunOutcome::Completed { exit_code, .. } => ExitCode::from(runner_exit_status(exit_code)),
    })
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

/// Exit statuses outside `0..=255` cannot be reported as-is and map to 1.
fn runner_exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
