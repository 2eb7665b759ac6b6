#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TtrackError {
    #[error("task file {path} does not exist")]
    StoreMissing { path: PathBuf },

    #[error("io error at {path}: {source}")]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("task with ID {0} was not found")]
    TaskNotFound(u32),

    #[error("invalid status '{0}': valid statuses are todo, in-progress, done")]
    InvalidStatus(String),

    #[error("config error: {0}")]
    Config(String),
}
