use crate::{Result, TestInvocation};

pub trait TestRunner: Send + Sync {
    /// Runs the invocation to completion and returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner process cannot be started.
    fn run(&self, invocation: &TestInvocation) -> Result<i32>;
}
