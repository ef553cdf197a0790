use super::Action;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<bool> {
    match action {
        Action::Probe { database_url } => Ok(crate::probe::run(database_url).await),
    }
}
