use sqlx::{Connection, Row, postgres::PgConnection};

use super::{ProbeDriver, SessionInfo};
use crate::{config::ConnectionConfig, errors::ProbeError};

/// sqlx-backed probe driver holding at most one connection.
///
/// The connection is owned exclusively for the lifetime of the run and closed
/// exactly once, in `disconnect`.
pub struct PgProbe {
    url: String,
    conn: Option<PgConnection>,
}

impl PgProbe {
    #[must_use]
    pub fn new(config: &ConnectionConfig) -> Self {
        Self {
            url: config.url().to_string(),
            conn: None,
        }
    }

    fn session(&mut self) -> Result<&mut PgConnection, ProbeError> {
        self.conn.as_mut().ok_or(ProbeError::Query {
            message: "not connected".to_string(),
            code: None,
        })
    }
}

impl ProbeDriver for PgProbe {
    async fn connect(&mut self) -> Result<(), ProbeError> {
        let conn = PgConnection::connect(&self.url)
            .await
            .map_err(|err| ProbeError::connection(&err))?;
        self.conn = Some(conn);
        Ok(())
    }

    async fn server_version(&mut self) -> Result<String, ProbeError> {
        let conn = self.session()?;
        sqlx::query_scalar("SELECT version() AS version")
            .fetch_one(conn)
            .await
            .map_err(|err| ProbeError::query(&err))
    }

    async fn table_count(&mut self) -> Result<i64, ProbeError> {
        let conn = self.session()?;
        sqlx::query_scalar(
            "SELECT COUNT(*) AS count FROM information_schema.tables WHERE table_schema = 'public'",
        )
        .fetch_one(conn)
        .await
        .map_err(|err| ProbeError::query(&err))
    }

    async fn session_info(&mut self) -> Result<SessionInfo, ProbeError> {
        let conn = self.session()?;
        // host(inet_server_addr()) keeps the address as text; both address and
        // port are NULL over a unix-domain socket.
        let row = sqlx::query(
            "SELECT current_database() AS database, current_user AS user, \
             host(inet_server_addr()) AS host, inet_server_port() AS port",
        )
        .fetch_one(conn)
        .await
        .map_err(|err| ProbeError::query(&err))?;

        Ok(SessionInfo {
            database: row
                .try_get("database")
                .map_err(|err| ProbeError::query(&err))?,
            user: row.try_get("user").map_err(|err| ProbeError::query(&err))?,
            host: row.try_get("host").map_err(|err| ProbeError::query(&err))?,
            port: row.try_get("port").map_err(|err| ProbeError::query(&err))?,
        })
    }

    async fn disconnect(&mut self) {
        // Failures while closing are ignored; the probe outcome is already
        // decided by this point.
        if let Some(conn) = self.conn.take() {
            let _ = conn.close().await;
        }
    }
}
