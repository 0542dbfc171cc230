use std::path::{Path, PathBuf};

use crate::{DEFAULT_GLOBAL_TEST, DEFAULT_INITIALIZER, DEFAULT_SOURCE_SUFFIX, DEFAULT_TEST_SUFFIX};

/// Maps a source file to the test file that covers it by suffix substitution,
/// e.g. `pkg/module.py` to `pkg/module_test.py`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestNaming {
    source_suffix: String,
    test_suffix: String,
}

impl Default for TestNaming {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_SUFFIX, DEFAULT_TEST_SUFFIX)
    }
}

impl TestNaming {
    #[must_use]
    pub fn new(source_suffix: impl Into<String>, test_suffix: impl Into<String>) -> Self {
        Self {
            source_suffix: source_suffix.into(),
            test_suffix: test_suffix.into(),
        }
    }

    /// The test file path for `path`, or `None` if `path` does not carry the
    /// source suffix. A path that already is a test file maps to itself.
    #[must_use]
    pub fn test_path_for(&self, path: &Path) -> Option<PathBuf> {
        let path = path.to_str()?;
        let stem = path.strip_suffix(self.source_suffix.as_str())?;
        let candidate = format!("{stem}{}", self.test_suffix);
        Some(PathBuf::from(self.collapse_doubled_marker(candidate)))
    }

    /// `x_test_test.py` -> `x_test.py`
    fn collapse_doubled_marker(&self, candidate: String) -> String {
        let Some(marker) = self.marker() else {
            return candidate;
        };
        let doubled = format!("{marker}{}", self.test_suffix);
        match candidate.strip_suffix(doubled.as_str()) {
            Some(stem) => format!("{stem}{}", self.test_suffix),
            None => candidate,
        }
    }

    fn marker(&self) -> Option<&str> {
        self.test_suffix
            .strip_suffix(self.source_suffix.as_str())
            .filter(|marker| !marker.is_empty())
    }
}

/// Pulls in one fixed test whenever a package initializer changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalTestRule {
    initializer: String,
    test_path: PathBuf,
}

impl Default for GlobalTestRule {
    fn default() -> Self {
        Self::new(DEFAULT_INITIALIZER, DEFAULT_GLOBAL_TEST)
    }
}

impl GlobalTestRule {
    #[must_use]
    pub fn new(initializer: impl Into<String>, test_path: impl Into<PathBuf>) -> Self {
        Self {
            initializer: initializer.into(),
            test_path: test_path.into(),
        }
    }

    #[must_use]
    pub fn test_path(&self) -> &Path {
        &self.test_path
    }

    #[must_use]
    pub fn is_initializer(&self, path: &Path) -> bool {
        path.to_str()
            .is_some_and(|p| p.ends_with(self.initializer.as_str()))
    }

    #[must_use]
    pub fn is_triggered_by<P: AsRef<Path>>(&self, changed: &[P]) -> bool {
        changed.iter().any(|path| self.is_initializer(path.as_ref()))
    }
}
