use std::path::{Path, PathBuf};

use changed_tests_git::{CommitInfo, MergeBase};

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if `start_path` is not inside a git working tree.
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf>;

    /// The commit sha `refspec` names, or `None` if it names no commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    fn resolve_commit(&self, repo_root: &Path, refspec: &str) -> Result<Option<String>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or `HEAD` has no commit.
    fn merge_base_with_head(&self, repo_root: &Path, refspec: &str) -> Result<MergeBase>;

    /// Repository-relative paths differing between `base` and the working tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the diff fails.
    fn changed_files(&self, repo_root: &Path, base: &str) -> Result<Vec<PathBuf>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or `HEAD` has no commit.
    fn head_commit(&self, repo_root: &Path) -> Result<CommitInfo>;
}
