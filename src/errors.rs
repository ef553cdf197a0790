//! Probe error types.
//!
//! Every failure is reported identically at the top level (message plus the
//! driver-supplied code when there is one); the closed enum exists so future
//! callers can tell the phases apart without string matching.

use thiserror::Error;

/// Everything that can go wrong during a single probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("DATABASE_URL is not set")]
    Config,

    #[error("{message}")]
    Connection {
        message: String,
        code: Option<String>,
    },

    #[error("{message}")]
    Query {
        message: String,
        code: Option<String>,
    },
}

impl ProbeError {
    /// Build a connection-phase error from the driver error.
    #[must_use]
    pub fn connection(err: &sqlx::Error) -> Self {
        let (message, code) = split_sqlx(err);
        Self::Connection { message, code }
    }

    /// Build a query-phase error from the driver error.
    #[must_use]
    pub fn query(err: &sqlx::Error) -> Self {
        let (message, code) = split_sqlx(err);
        Self::Query { message, code }
    }

    /// The SQLSTATE (or other driver code) attached to this error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Config => None,
            Self::Connection { code, .. } | Self::Query { code, .. } => code.as_deref(),
        }
    }
}

// Server-reported errors carry a SQLSTATE; transport and protocol errors only
// have a message.
fn split_sqlx(err: &sqlx::Error) -> (String, Option<String>) {
    match err {
        sqlx::Error::Database(db_err) => (
            db_err.message().to_string(),
            db_err.code().map(|c| c.to_string()),
        ),
        _ => (err.to_string(), None),
    }
}
