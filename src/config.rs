use std::net::SocketAddr;

use crate::{auth::AccessGuard, error::AdminError, models::BrokerProfile};

const DEFAULT_ADMIN_PASSWORD: &str = "change-me";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub admin_password: Option<String>,
    pub admin_password_hash: Option<String>,
    pub default_broker: BrokerProfile,
    pub seed_demo_users: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AdminError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads through `lookup`, which
    /// keeps tests away from the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AdminError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let bind_addr = var("BIND_ADDR", "0.0.0.0:8080")
            .parse::<SocketAddr>()
            .map_err(|err| AdminError::Config(format!("invalid BIND_ADDR: {err}")))?;
        let seed_demo_users = match var("SEED_DEMO_USERS", "true").to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                return Err(AdminError::Config(format!("invalid SEED_DEMO_USERS: {other}")));
            }
        };

        Ok(Self {
            bind_addr,
            admin_password: lookup("ADMIN_PASSWORD").filter(|value| !value.is_empty()),
            admin_password_hash: lookup("ADMIN_PASSWORD_HASH").filter(|value| !value.is_empty()),
            default_broker: BrokerProfile {
                broker_url: var("DEFAULT_BROKER_URL", "mqtt://localhost:1883"),
                username: var("DEFAULT_BROKER_USERNAME", "depot"),
                password: var("DEFAULT_BROKER_PASSWORD", "depot"),
                is_default: true,
            },
            seed_demo_users,
        })
    }

    pub fn access_guard(&self) -> Result<AccessGuard, AdminError> {
        if let Some(hash) = &self.admin_password_hash {
            return AccessGuard::from_argon2_hash(hash);
        }
        match &self.admin_password {
            Some(password) => Ok(AccessGuard::from_password(password)),
            None => {
                tracing::warn!("ADMIN_PASSWORD not set; using the built-in default");
                Ok(AccessGuard::from_password(DEFAULT_ADMIN_PASSWORD))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, AdminError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).expect("defaults are valid");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.default_broker.broker_url, "mqtt://localhost:1883");
        assert!(config.seed_demo_users);
        let guard = config.access_guard().expect("guard");
        assert!(guard.verify(DEFAULT_ADMIN_PASSWORD));
    }

    #[test]
    fn hash_takes_precedence_over_plain_password() {
        let hash = crate::auth::hash_password("from-hash").expect("hash");
        let config = config(&[("ADMIN_PASSWORD", "plain"), ("ADMIN_PASSWORD_HASH", hash.as_str())])
            .expect("valid");
        let guard = config.access_guard().expect("guard");
        assert!(guard.verify("from-hash"));
        assert!(!guard.verify("plain"));
    }

    #[test]
    fn malformed_values_are_config_errors() {
        assert!(matches!(config(&[("BIND_ADDR", "nowhere")]), Err(AdminError::Config(_))));
        assert!(matches!(config(&[("SEED_DEMO_USERS", "maybe")]), Err(AdminError::Config(_))));
    }
}
