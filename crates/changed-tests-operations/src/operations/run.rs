use std::path::{Path, PathBuf};

use changed_tests_core::{RandomSeed, SeedSource};
use tracing::debug;

use crate::traits::{GitProvider, TestRunner};
use crate::{OperationError, Result, TestInvocation};

pub struct RunInput<'a> {
    pub repo_root: &'a Path,
    pub files: &'a [PathBuf],
    /// Runner program followed by its fixed leading arguments.
    pub runner: &'a [String],
    /// Caller flags, placed before the file list.
    pub runner_args: &'a [String],
    /// Environment variable the seed is exported under.
    pub seed_env: &'a str,
    /// Value of `seed_env` in the caller's environment.
    pub existing_seed: Option<String>,
    pub extra_env: Vec<(String, String)>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    NothingToRun,
    Completed { exit_code: i32, seed: RandomSeed },
}

pub struct RunOperation<G, R> {
    git_provider: G,
    test_runner: R,
}

impl<G, R> RunOperation<G, R>
where
    G: GitProvider,
    R: TestRunner,
{
    pub fn new(git_provider: G, test_runner: R) -> Self {
        Self {
            git_provider,
            test_runner,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the seed cannot be derived from the latest commit
    /// or the runner cannot be started.
    pub fn execute(&self, input: RunInput<'_>) -> Result<RunOutcome> {
        if input.files.is_empty() {
            return Ok(RunOutcome::NothingToRun);
        }

        let seed = RandomSeed::resolve(input.existing_seed.clone(), || {
            self.git_provider
                .head_commit(input.repo_root)
                .map(|commit| commit.time)
        })?;
        match seed.source() {
            SeedSource::Environment => debug!(seed = seed.value(), "using seed from environment"),
            SeedSource::CommitTime => debug!(seed = seed.value(), "seeded from latest commit time"),
        }

        let invocation = build_invocation(&input, &seed)?;
        let exit_code = self.test_runner.run(&invocation)?;
        debug!(exit_code, "test runner finished");

        Ok(RunOutcome::Completed { exit_code, seed })
    }
}

fn build_invocation(input: &RunInput<'_>, seed: &RandomSeed) -> Result<TestInvocation> {
    let (program, fixed_args) = input
        .runner
        .split_first()
        .ok_or(OperationError::EmptyRunner)?;

    let args = fixed_args
        .iter()
        .chain(input.runner_args)
        .cloned()
        .chain(input.files.iter().map(|f| f.to_string_lossy().into_owned()))
        .collect();

    let mut env = input.extra_env.clone();
    env.push((input.seed_env.to_string(), seed.value().to_string()));

    Ok(TestInvocation {
        program: program.clone(),
        args,
        working_dir: input.repo_root.to_path_buf(),
        env,
    })
}
