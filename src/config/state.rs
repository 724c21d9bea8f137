// Application state shared with every route

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;

// * Read-only state; cloning only bumps the Arc.
// * The current handlers don't extract it; it carries configuration for routes added later.
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    /// Wraps an already-loaded configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }

    /// Builds state from the process-wide configuration singleton
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: &'static EnvironmentVariables = EnvironmentVariables::instance()?;
        Ok(Self::new(environment.clone()))
    }
}
