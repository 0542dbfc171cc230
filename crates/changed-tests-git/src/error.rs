use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound { refspec: String },

    #[error("'{refspec}' is a {kind}, not a commit")]
    NotACommit { refspec: String, kind: String },

    #[error("repository has no commits yet")]
    UnbornHead,

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
