#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pgprobe::errors::ProbeError;
use pgprobe::queries::{ProbeDriver, SessionInfo};

/// Step at which the mock driver should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Connect,
    Version,
    Tables,
    Session,
}

/// Scripted driver counting connect/disconnect calls, so tests can verify the
/// connection is acquired and released exactly once on every path.
pub struct MockDriver {
    pub connects: usize,
    pub disconnects: usize,
    pub version: String,
    pub tables: i64,
    pub session: SessionInfo,
    pub fail_at: Option<FailAt>,
    pub message: String,
    pub code: Option<String>,
}

impl MockDriver {
    pub fn healthy() -> Self {
        Self {
            connects: 0,
            disconnects: 0,
            version: "PostgreSQL 15.2 on x86_64-pc-linux-gnu, compiled by gcc (GCC) 12.2.0, 64-bit"
                .to_string(),
            tables: 7,
            session: SessionInfo {
                database: "tandaxn".to_string(),
                user: "app".to_string(),
                host: Some("10.0.0.1".to_string()),
                port: Some(5432),
            },
            fail_at: None,
            message: String::new(),
            code: None,
        }
    }

    pub fn failing(fail_at: FailAt, message: &str, code: Option<&str>) -> Self {
        Self {
            fail_at: Some(fail_at),
            message: message.to_string(),
            code: code.map(ToString::to_string),
            ..Self::healthy()
        }
    }

    fn error(&self, step: FailAt) -> Result<(), ProbeError> {
        if self.fail_at == Some(step) {
            let message = self.message.clone();
            let code = self.code.clone();
            if step == FailAt::Connect {
                return Err(ProbeError::Connection { message, code });
            }
            return Err(ProbeError::Query { message, code });
        }
        Ok(())
    }
}

impl ProbeDriver for MockDriver {
    async fn connect(&mut self) -> Result<(), ProbeError> {
        self.connects += 1;
        self.error(FailAt::Connect)
    }

    async fn server_version(&mut self) -> Result<String, ProbeError> {
        self.error(FailAt::Version)?;
        Ok(self.version.clone())
    }

    async fn table_count(&mut self) -> Result<i64, ProbeError> {
        self.error(FailAt::Tables)?;
        Ok(self.tables)
    }

    async fn session_info(&mut self) -> Result<SessionInfo, ProbeError> {
        self.error(FailAt::Session)?;
        Ok(self.session.clone())
    }

    async fn disconnect(&mut self) {
        self.disconnects += 1;
    }
}
