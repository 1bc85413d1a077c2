use std::sync::Arc;

use crate::{
    audit::AuditLog,
    auth::AccessGuard,
    config::AppConfig,
    error::AdminError,
    models::{BrokerProfile, PriceTable},
    settings::SettingsStore,
    users::UserRegistry,
};

#[derive(Clone)]
pub struct AppState {
    pub guard: Arc<AccessGuard>,
    pub settings: Arc<SettingsStore>,
    pub users: Arc<UserRegistry>,
    pub audit: Arc<AuditLog>,
}

impl AppState {
    pub fn new(guard: AccessGuard, default_broker: BrokerProfile, users: UserRegistry) -> Self {
        let guard = Arc::new(guard);
        Self {
            guard: guard.clone(),
            settings: Arc::new(SettingsStore::new(
                guard,
                default_broker,
                PriceTable::default(),
            )),
            users: Arc::new(users),
            audit: Arc::new(AuditLog::default()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AdminError> {
        let users = if config.seed_demo_users {
            UserRegistry::seeded()
        } else {
            UserRegistry::new()
        };
        Ok(Self::new(config.access_guard()?, config.default_broker.clone(), users))
    }
}
