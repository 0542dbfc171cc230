use std::process::Command;

use tracing::{debug, warn};

use crate::traits::TestRunner;
use crate::{OperationError, Result, TestInvocation};

/// Runs the test runner as a child process sharing this process's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessTestRunner;

impl TestRunner for ProcessTestRunner {
    fn run(&self, invocation: &TestInvocation) -> Result<i32> {
        debug!(
            program = %invocation.program,
            args = ?invocation.args,
            cwd = %invocation.working_dir.display(),
            "starting test runner"
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .envs(invocation.env.iter().cloned())
            .status()
            .map_err(|source| OperationError::RunnerSpawn {
                program: invocation.program.clone(),
                source,
            })?;

        if let Some(code) = status.code() {
            return Ok(code);
        }

        warn!(%status, "test runner terminated without an exit code");
        Ok(1)
    }
}
