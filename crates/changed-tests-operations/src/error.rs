use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] changed_tests_git::GitError),

    #[error("no such revision '{revision}'")]
    NoSuchRevision { revision: String },

    #[error(
        "no default revision found to compare against (tried {}); pass the revision to diff against as the first argument, e.g. 'origin/main' or 'HEAD~1'",
        candidates.join(", ")
    )]
    NoDefaultRevision { candidates: Vec<String> },

    #[error("test runner command is empty")]
    EmptyRunner,

    #[error("failed to start test runner '{program}'")]
    RunnerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;
