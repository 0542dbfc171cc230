use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::{GlobalTestRule, TestNaming};

#[derive(Debug, Clone, Default)]
pub struct SelectionRules {
    pub naming: TestNaming,
    pub global_test: Option<GlobalTestRule>,
}

/// The test files to run for a set of changed paths.
///
/// Derived tests come first, sorted and deduplicated; the global test, when
/// triggered, is appended after them exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSelection {
    files: Vec<PathBuf>,
}

impl TestSelection {
    /// Derives the selection from `changed`. Only candidates for which
    /// `exists` holds are kept; a source file without a test is dropped.
    pub fn from_changes<P, F>(changed: &[P], rules: &SelectionRules, exists: F) -> Self
    where
        P: AsRef<Path>,
        F: Fn(&Path) -> bool,
    {
        let derived: BTreeSet<PathBuf> = changed
            .iter()
            .filter_map(|path| rules.naming.test_path_for(path.as_ref()))
            .filter(|candidate| exists(candidate.as_path()))
            .collect();

        let mut files: Vec<PathBuf> = derived.into_iter().collect();

        if let Some(rule) = rules.global_test.as_ref().filter(|rule| {
            rule.is_triggered_by(changed) && !files.iter().any(|f| f == rule.test_path())
        }) {
            files.push(rule.test_path().to_path_buf());
        }

        Self { files }
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
