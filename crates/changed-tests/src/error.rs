use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] changed_tests_operations::OperationError),

    #[error(transparent)]
    Config(#[from] changed_tests_config::ConfigError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
