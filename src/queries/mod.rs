pub mod postgres;

use crate::errors::ProbeError;

/// The five operations a probe run performs, in order.
///
/// The production implementation is [`postgres::PgProbe`]; tests substitute a
/// mock to verify the connect/release accounting.
#[allow(async_fn_in_trait)]
#[allow(clippy::missing_errors_doc)] // every method fails the same way: the driver reports why
pub trait ProbeDriver {
    /// Open the session. Suspends until the driver reports success or failure.
    async fn connect(&mut self) -> Result<(), ProbeError>;

    /// `SELECT version()`.
    async fn server_version(&mut self) -> Result<String, ProbeError>;

    /// Number of tables in the `public` schema.
    async fn table_count(&mut self) -> Result<i64, ProbeError>;

    /// Current database, user, server address and port.
    async fn session_info(&mut self) -> Result<SessionInfo, ProbeError>;

    /// Release the session. Must be safe to call whether or not `connect`
    /// succeeded; failures during release are swallowed.
    async fn disconnect(&mut self);
}

/// Session details reported by the server.
///
/// Host and port are `None` when the session runs over a unix-domain socket,
/// where `inet_server_addr()` returns NULL.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub database: String,
    pub user: String,
    pub host: Option<String>,
    pub port: Option<i32>,
}

/// Everything a successful probe run found out, for console display only.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Full server version string.
    pub version: String,
    /// Tables in the `public` schema.
    pub tables: i64,
    pub session: SessionInfo,
}
