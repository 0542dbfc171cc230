#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    /// Committer time in seconds since the Unix epoch.
    pub time: i64,
}

/// Where a diff base came from after merge-base computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeBase {
    /// The revision is an ancestor of `HEAD` and can be compared directly.
    Revision { sha: String },
    /// The revision diverged from `HEAD`; diffs use the common ancestor.
    Ancestor { sha: String },
    /// No common history.
    Unrelated,
}
