//! Crate error type.

use thiserror::Error;

use crate::form::SubmitError;
use crate::pass::{LengthError, PoolError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Length(#[from] LengthError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("{0}")]
    Args(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("ignoring {key}={value:?}: expected auto, light or dark")]
    Env { key: &'static str, value: String },

    #[error("invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<SubmitError> for Error {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Length(e) => Error::Length(e),
            SubmitError::Pool(e) => Error::Pool(e),
        }
    }
}

/// Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;
