use std::path::{Path, PathBuf};

use changed_tests_git::{CommitInfo, GitError, MergeBase, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf> {
        let repo = Repository::open(start_path)?;
        Ok(repo.root().to_path_buf())
    }

    fn resolve_commit(&self, repo_root: &Path, refspec: &str) -> Result<Option<String>> {
        let repo = Repository::open(repo_root)?;
        match repo.resolve_commit(refspec) {
            Ok(sha) => Ok(Some(sha)),
            Err(GitError::RefNotFound { .. } | GitError::NotACommit { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn merge_base_with_head(&self, repo_root: &Path, refspec: &str) -> Result<MergeBase> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.merge_base_with_head(refspec)?)
    }

    fn changed_files(&self, repo_root: &Path, base: &str) -> Result<Vec<PathBuf>> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.changed_files_in_worktree(base)?)
    }

    fn head_commit(&self, repo_root: &Path) -> Result<CommitInfo> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.head_commit()?)
    }
}
