use super::{commands, dispatch};
use anyhow::Result;

/// Main orchestrator - Pure orchestration with no business logic
///
/// Four-step data flow:
/// 1. Parse: Extract CLI arguments
/// 2. Dispatch: Convert `ArgMatches` into typed Action enum
/// 3. Execute: Run the action's business logic
/// 4. Report: Hand the probe outcome back for the exit code
///
/// # Errors
///
/// Returns an error if any step in the flow fails
pub async fn start() -> Result<bool> {
    // 1. Parse: Extract CLI arguments
    let matches = commands::new().get_matches();

    // 2. Dispatch: Convert ArgMatches into typed Action enum
    let action = dispatch::dispatch(&matches)?;

    // 3 + 4. Execute and report the outcome
    action.execute().await
}
