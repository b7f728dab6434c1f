use std::sync::Arc;
use triage_core::{Config, SanitizedConfig, TriageService};

/// Shared application state
pub struct AppState {
    config: Config,
    service: Arc<dyn TriageService>,
}

impl AppState {
    pub fn new(config: Config, service: Arc<dyn TriageService>) -> Self {
        Self { config, service }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn service(&self) -> &dyn TriageService {
        self.service.as_ref()
    }
}
