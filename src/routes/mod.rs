pub mod admin;
pub mod settings;
pub mod users;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/settings/broker",
            get(settings::get_broker_settings).put(settings::update_broker_settings),
        )
        .route("/api/settings/broker/reset", post(settings::reset_broker_settings))
        .route(
            "/api/settings/prices",
            get(settings::get_price_settings).put(settings::update_price_settings),
        )
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/types", get(users::list_user_types))
        .route(
            "/api/users/{id}",
            patch(users::update_user).delete(users::delete_user),
        )
        .route("/api/admin/audit-logs", get(admin::list_audit_logs))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
