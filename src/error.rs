// External libraries
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to build worker pool: {source}")]
    ThreadPool {
        #[from]
        source: rayon::ThreadPoolBuildError,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl LifeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LifeError::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LifeError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
