mod run;

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Probe { database_url: Option<String> },
}

impl Action {
    /// Execute the action
    ///
    /// Returns `true` when the probe succeeded end to end.
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub async fn execute(self) -> anyhow::Result<bool> {
        run::execute(self).await
    }
}
