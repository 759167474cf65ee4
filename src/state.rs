use crate::config::AppConfig;
use crate::services::backend::MaintenanceApi;
use crate::services::session::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn MaintenanceApi>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: AppConfig, api: Box<dyn MaintenanceApi>) -> Self {
        let sessions = SessionStore::new(config.session_ttl_minutes, config.max_lookahead_days);
        Self {
            config,
            api,
            sessions,
        }
    }
}
