//! The one-shot probe run: connect, three diagnostic queries, disconnect.
//!
//! Strictly sequential, no retries, no timeouts. Any failure between connect
//! and the last query is caught once here and reported identically; the
//! connection is released exactly once on every path.

use crate::{
    config::ConnectionConfig,
    errors::ProbeError,
    queries::{ProbeDriver, ProbeReport, postgres::PgProbe},
};

/// Characters of the server version string shown on the console.
const VERSION_DISPLAY_LEN: usize = 50;

/// Run the probe against the database named by `DATABASE_URL`.
///
/// Returns `true` when the connection and all three queries succeeded. All
/// status lines, the success banner and the failure report are printed here;
/// the caller only maps the outcome to an exit code.
pub async fn run(database_url: Option<String>) -> bool {
    println!("Testing connection to PostgreSQL...\n");

    let config = match ConnectionConfig::from_env(database_url) {
        Ok(config) => config,
        Err(err) => {
            print_failure(&err);
            return false;
        }
    };

    println!("Connection string: {}\n", config.redacted());

    let mut driver = PgProbe::new(&config);
    match run_with(&mut driver).await {
        Ok(_) => {
            println!("\nSUCCESS: database is reachable and ready");
            println!("Working configuration:");
            println!("  - connection method: direct");
            println!("  - sslmode: disable");
            println!("Next steps:");
            println!("  1. run your migrations against this database");
            println!("  2. point the application at the same DATABASE_URL\n");
            true
        }
        Err(err) => {
            print_failure(&err);
            false
        }
    }
}

/// Execute the four probe steps against `driver`, releasing the connection
/// afterwards no matter which step failed.
///
/// # Errors
///
/// Returns the first error raised by connect or any of the three queries;
/// later steps are not attempted.
pub async fn run_with<D: ProbeDriver>(driver: &mut D) -> Result<ProbeReport, ProbeError> {
    let outcome = steps(driver).await;
    driver.disconnect().await;
    println!("Disconnected from database");
    outcome
}

async fn steps<D: ProbeDriver>(driver: &mut D) -> Result<ProbeReport, ProbeError> {
    println!("1. Connecting to database...");
    driver.connect().await?;
    println!("   connected\n");

    println!("2. Checking server version...");
    let version = driver.server_version().await?;
    println!("   {}...\n", short_version(&version));

    println!("3. Checking tables in public schema...");
    let tables = driver.table_count().await?;
    println!("   Found {tables} tables in public schema\n");

    println!("4. Checking session info...");
    let session = driver.session_info().await?;
    println!("   Database: {}", session.database);
    println!("   User: {}", session.user);
    println!("   Host: {}", session.host.as_deref().unwrap_or("N/A"));
    match session.port {
        Some(port) => println!("   Port: {port}"),
        None => println!("   Port: N/A"),
    }

    Ok(ProbeReport {
        version,
        tables,
        session,
    })
}

fn print_failure(err: &ProbeError) {
    eprintln!("{}", failure_report(err));
}

/// Failure text printed for every error kind: message plus the driver code
/// when the server supplied one.
#[must_use]
pub fn failure_report(err: &ProbeError) -> String {
    format!(
        "ERROR: connection test failed\nError message: {err}\nError code: {}",
        err.code().unwrap_or("N/A")
    )
}

/// First 50 characters of the version string, for display.
#[must_use]
pub fn short_version(version: &str) -> String {
    version.chars().take(VERSION_DISPLAY_LEN).collect()
}
