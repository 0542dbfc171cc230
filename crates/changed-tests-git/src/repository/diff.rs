use std::path::PathBuf;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Files that differ between `base` and the working tree, staged or not.
    ///
    /// Untracked files are not reported.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if `base` cannot be resolved.
    pub fn changed_files_in_worktree(&self, base: &str) -> Result<Vec<PathBuf>> {
        let base_tree = self.resolve_tree(base)?;

        let mut diff = self
            .inner
            .diff_tree_to_workdir_with_index(Some(&base_tree), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut paths = Vec::new();

        for delta in diff.deltas() {
            if !matches!(
                delta.status(),
                git2::Delta::Added
                    | git2::Delta::Deleted
                    | git2::Delta::Modified
                    | git2::Delta::Renamed
                    | git2::Delta::Copied
                    | git2::Delta::Typechange
            ) {
                continue;
            }

            // Deleted entries only carry the old side.
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            paths.push(path);
        }

        Ok(paths)
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        let obj = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        obj.peel_to_tree().map_err(|_| GitError::RefNotFound {
            refspec: refspec.to_string(),
        })
    }
}
