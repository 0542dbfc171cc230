use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// The caller already exported a seed.
    Environment,
    /// Committer timestamp of the latest commit on the current branch.
    CommitTime,
}

/// Random seed handed to the test runner through an environment variable.
///
/// Seeding from the latest commit keeps reruns on the same commit
/// reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSeed {
    value: String,
    source: SeedSource,
}

impl RandomSeed {
    #[must_use]
    pub fn from_environment(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: SeedSource::Environment,
        }
    }

    #[must_use]
    pub fn from_commit_time(seconds: i64) -> Self {
        Self {
            value: seconds.to_string(),
            source: SeedSource::CommitTime,
        }
    }

    /// Uses `existing` when it holds a non-empty value, otherwise asks
    /// `commit_time` for the latest commit timestamp.
    ///
    /// # Errors
    ///
    /// Propagates the error of `commit_time`.
    pub fn resolve<E, F>(existing: Option<String>, commit_time: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<i64, E>,
    {
        match existing.filter(|value| !value.is_empty()) {
            Some(value) => Ok(Self::from_environment(value)),
            None => commit_time().map(Self::from_commit_time),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn source(&self) -> SeedSource {
        self.source
    }
}

impl fmt::Display for RandomSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
