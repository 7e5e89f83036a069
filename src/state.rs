use crate::config::AppConfig;
use crate::services::Services;
use crate::store::WizardStore;

pub struct AppState {
    pub config: AppConfig,
    pub services: Services,
    pub wizards: WizardStore,
}

impl AppState {
    pub fn new(config: AppConfig, services: Services) -> Self {
        let wizards = WizardStore::new(
            chrono::Duration::minutes(config.wizard_ttl_minutes),
            config.wizard_capacity,
        );
        Self {
            config,
            services,
            wizards,
        }
    }
}
