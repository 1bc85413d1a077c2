use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    auth::AccessGuard,
    error::AdminError,
    models::{BrokerProfile, BrokerSettingsView, PriceTable, UpdatePricesRequest},
    validation,
};

struct SettingsState {
    broker: BrokerProfile,
    prices: PriceTable,
}

/// Broker connection profile and commodity prices.
///
/// Broker mutations are gated by the [`AccessGuard`]; the credential is
/// checked before the lock is taken and nothing is written on a mismatch.
pub struct SettingsStore {
    guard: Arc<AccessGuard>,
    default_broker: BrokerProfile,
    state: Mutex<SettingsState>,
}

impl SettingsStore {
    pub fn new(guard: Arc<AccessGuard>, default_broker: BrokerProfile, prices: PriceTable) -> Self {
        let default_broker = BrokerProfile {
            is_default: true,
            ..default_broker
        };
        Self {
            guard,
            state: Mutex::new(SettingsState {
                broker: default_broker.clone(),
                prices,
            }),
            default_broker,
        }
    }

    pub fn broker_settings(&self) -> BrokerSettingsView {
        self.state.lock().broker.masked()
    }

    pub fn update_broker_settings(
        &self,
        broker_url: String,
        username: String,
        password: String,
        credential: &str,
    ) -> Result<BrokerSettingsView, AdminError> {
        self.authorize(credential, "update")?;
        let mut state = self.state.lock();
        state.broker = BrokerProfile {
            broker_url,
            username,
            password,
            is_default: false,
        };
        info!(broker_url = %state.broker.broker_url, "broker settings updated");
        Ok(state.broker.masked())
    }

    pub fn reset_broker_settings(&self, credential: &str) -> Result<BrokerSettingsView, AdminError> {
        self.authorize(credential, "reset")?;
        let mut state = self.state.lock();
        state.broker = self.default_broker.clone();
        info!(broker_url = %state.broker.broker_url, "broker settings reset to defaults");
        Ok(state.broker.masked())
    }

    pub fn price_settings(&self) -> PriceTable {
        self.state.lock().prices
    }

    /// Merges the supplied prices into the table. Every supplied value is
    /// checked before any field is written.
    pub fn update_price_settings(&self, update: UpdatePricesRequest) -> Result<PriceTable, AdminError> {
        validation::prices(&update)?;
        let mut state = self.state.lock();
        let prices = &mut state.prices;
        if let Some(value) = update.gasoline_price {
            prices.gasoline_price = value;
        }
        if let Some(value) = update.diesel_price {
            prices.diesel_price = value;
        }
        if let Some(value) = update.electricity_price {
            prices.electricity_price = value;
        }
        info!(
            gasoline = prices.gasoline_price,
            diesel = prices.diesel_price,
            electricity = prices.electricity_price,
            "price settings updated"
        );
        Ok(*prices)
    }

    fn authorize(&self, credential: &str, operation: &str) -> Result<(), AdminError> {
        if self.guard.verify(credential) {
            return Ok(());
        }
        warn!(operation, "broker settings change rejected: invalid admin password");
        Err(AdminError::Unauthorized)
    }

    #[cfg(test)]
    fn raw_broker(&self) -> BrokerProfile {
        self.state.lock().broker.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MASK;

    const ADMIN: &str = "admin-secret";

    fn default_broker() -> BrokerProfile {
        BrokerProfile {
            broker_url: "mqtt://localhost:1883".into(),
            username: "depot".into(),
            password: "depot-pass".into(),
            is_default: true,
        }
    }

    fn store() -> SettingsStore {
        SettingsStore::new(
            Arc::new(AccessGuard::from_password(ADMIN)),
            default_broker(),
            PriceTable::default(),
        )
    }

    #[test]
    fn reads_are_masked() {
        let store = store();
        let view = store.broker_settings();
        assert_eq!(view.username, MASK);
        assert_eq!(view.password, MASK);
        assert!(view.is_default);

        let view = store
            .update_broker_settings("mqtt://b:1883".into(), "u".into(), "p".into(), ADMIN)
            .expect("authorized");
        assert_eq!(view.username, MASK);
        assert_eq!(view.password, MASK);
        assert_eq!(store.broker_settings().password, MASK);
    }

    #[test]
    fn wrong_credential_leaves_state_untouched() {
        let store = store();
        let before = store.raw_broker();
        for credential in ["wrong", "", "admin-secret "] {
            let result = store.update_broker_settings(
                "mqtt://evil:1883".into(),
                "x".into(),
                "y".into(),
                credential,
            );
            assert_eq!(result, Err(AdminError::Unauthorized));
        }
        assert_eq!(store.raw_broker(), before);
        assert!(store.broker_settings().is_default);
    }

    #[test]
    fn update_clears_default_flag_even_with_default_values() {
        let store = store();
        let defaults = default_broker();
        let view = store
            .update_broker_settings(defaults.broker_url, defaults.username, defaults.password, ADMIN)
            .expect("authorized");
        assert!(!view.is_default);
        assert!(!store.raw_broker().is_default);
    }

    #[test]
    fn update_stores_raw_credentials() {
        let store = store();
        store
            .update_broker_settings("mqtts://b:8883".into(), "svc".into(), "pw".into(), ADMIN)
            .expect("authorized");
        let raw = store.raw_broker();
        assert_eq!(raw.broker_url, "mqtts://b:8883");
        assert_eq!(raw.username, "svc");
        assert_eq!(raw.password, "pw");
    }

    #[test]
    fn reset_restores_defaults() {
        let store = store();
        store
            .update_broker_settings("mqtt://other:1883".into(), "a".into(), "b".into(), ADMIN)
            .expect("authorized");

        assert_eq!(store.reset_broker_settings("nope"), Err(AdminError::Unauthorized));
        assert!(!store.broker_settings().is_default);

        let view = store.reset_broker_settings(ADMIN).expect("authorized");
        assert!(view.is_default);
        assert_eq!(view.broker_url, "mqtt://localhost:1883");
        assert_eq!(store.raw_broker(), default_broker());
    }

    #[test]
    fn partial_price_update_touches_only_supplied_fields() {
        let store = store();
        let before = store.price_settings();
        let after = store
            .update_price_settings(UpdatePricesRequest {
                diesel_price: Some(60.0),
                ..Default::default()
            })
            .expect("valid");
        assert_eq!(after.diesel_price, 60.0);
        assert_eq!(after.gasoline_price, before.gasoline_price);
        assert_eq!(after.electricity_price, before.electricity_price);
        assert_eq!(store.price_settings(), after);
    }

    #[test]
    fn invalid_price_update_is_all_or_nothing() {
        let store = store();
        let before = store.price_settings();
        let result = store.update_price_settings(UpdatePricesRequest {
            gasoline_price: Some(70.0),
            diesel_price: Some(f64::NAN),
            electricity_price: None,
        });
        assert!(matches!(result, Err(AdminError::Validation(_))));
        assert_eq!(store.price_settings(), before);
    }

    #[test]
    fn concurrent_update_and_reset_never_expose_a_mixed_profile() {
        let store = store();
        let default_view = default_broker().masked();
        let updated = BrokerProfile {
            broker_url: "mqtts://replica:8883".into(),
            username: "svc".into(),
            password: "svc-pass".into(),
            is_default: false,
        };
        let updated_view = updated.masked();

        std::thread::scope(|scope| {
            let store = &store;
            let updated = &updated;
            scope.spawn(move || {
                for _ in 0..200 {
                    store
                        .update_broker_settings(
                            updated.broker_url.clone(),
                            updated.username.clone(),
                            updated.password.clone(),
                            ADMIN,
                        )
                        .expect("authorized");
                }
            });
            scope.spawn(move || {
                for _ in 0..200 {
                    store.reset_broker_settings(ADMIN).expect("authorized");
                }
            });
            for _ in 0..4 {
                let default_view = &default_view;
                let updated_view = &updated_view;
                scope.spawn(move || {
                    for _ in 0..500 {
                        let view = store.broker_settings();
                        assert!(
                            view == *default_view || view == *updated_view,
                            "mixed broker view: {view:?}"
                        );
                    }
                });
            }
        });

        let raw = store.raw_broker();
        assert!(raw == default_broker() || raw == updated);
    }
}
