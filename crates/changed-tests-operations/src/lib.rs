mod error;
pub mod operations;
pub mod providers;
pub mod traits;
mod types;

#[cfg(test)]
pub mod mocks;

pub use changed_tests_git::MergeBase;
pub use error::{OperationError, Result};
pub use types::{ResolvedRevision, TestInvocation};
