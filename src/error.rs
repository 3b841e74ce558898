use thiserror::Error;

/// Errors raised by the solvers when their arguments are malformed.
///
/// Every solver validates its input before allocating any table, so an error
/// always means no work was done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("table of {rows} x {cols} cells does not fit in memory")]
    TableTooLarge { rows: usize, cols: usize },
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
