use std::path::PathBuf;

use changed_tests_git::MergeBase;

/// A revision that resolved to a commit, together with the commit the
/// working tree is diffed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRevision {
    pub revision: String,
    pub merge_base: MergeBase,
}

impl ResolvedRevision {
    /// The revision to diff the working tree against: the merge base when
    /// the revision diverged from `HEAD`, otherwise the revision itself.
    #[must_use]
    pub fn compare_to(&self) -> &str {
        match &self.merge_base {
            MergeBase::Ancestor { sha } => sha,
            MergeBase::Revision { .. } | MergeBase::Unrelated => &self.revision,
        }
    }
}

/// A fully assembled runner command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub env: Vec<(String, String)>,
}
