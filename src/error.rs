//! Crate-wide error types.

use thiserror::Error;

use crate::domain::error::DomainError;

/// Problems loading or validating the TOML configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config is missing {field}")]
    MissingField { field: &'static str },

    #[error("config {field} is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("cannot read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("feed error from {bookmaker}: {reason}")]
    Feed { bookmaker: String, reason: String },

    #[error("store error: {0}")]
    Store(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no arbitrage opportunity exists with these odds")]
    NoArbitrage,

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A feed failure attributed to one bookmaker.
    pub fn feed(bookmaker: impl Into<String>, reason: impl ToString) -> Self {
        Self::Feed {
            bookmaker: bookmaker.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias over [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
