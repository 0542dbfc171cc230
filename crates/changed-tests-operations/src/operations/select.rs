use std::path::{Path, PathBuf};

use changed_tests_core::{SelectionRules, TestSelection};
use tracing::debug;

use crate::Result;
use crate::traits::{FileProbe, GitProvider};

pub struct SelectInput<'a> {
    /// Revision or sha the working tree is diffed against.
    pub compare_to: &'a str,
    pub rules: &'a SelectionRules,
}

#[derive(Debug)]
pub struct SelectOutput {
    /// Repository-relative paths in the order git reported them.
    pub changed_files: Vec<PathBuf>,
    pub selection: TestSelection,
}

pub struct SelectOperation<G, F> {
    git_provider: G,
    file_probe: F,
}

impl<G, F> SelectOperation<G, F>
where
    G: GitProvider,
    F: FileProbe,
{
    pub fn new(git_provider: G, file_probe: F) -> Self {
        Self {
            git_provider,
            file_probe,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the diff against `compare_to` fails.
    pub fn execute(&self, repo_root: &Path, input: &SelectInput<'_>) -> Result<SelectOutput> {
        let changed_files = self.git_provider.changed_files(repo_root, input.compare_to)?;
        debug!(count = changed_files.len(), base = input.compare_to, "changed files");

        let selection = TestSelection::from_changes(&changed_files, input.rules, |candidate| {
            let exists = self.file_probe.exists(&repo_root.join(candidate));
            if !exists {
                debug!(candidate = %candidate.display(), "no test file, skipping");
            }
            exists
        });

        Ok(SelectOutput {
            changed_files,
            selection,
        })
    }
}
