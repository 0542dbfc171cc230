use crate::{CommitInfo, GitError, Result};

use super::Repository;

impl Repository {
    /// The commit `HEAD` points at.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::UnbornHead`] if the current branch has no commits.
    pub fn head_commit(&self) -> Result<CommitInfo> {
        let head = self.inner.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch {
                GitError::UnbornHead
            } else {
                GitError::Git(e)
            }
        })?;
        let commit = head.peel_to_commit()?;

        Ok(CommitInfo {
            sha: commit.id().to_string(),
            time: commit.time().seconds(),
        })
    }
}
