use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use depot_admin_api::{config::AppConfig, routes, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");
    let state = AppState::from_config(&config).expect("failed to build application state");
    tracing::info!(
        users = state.users.len(),
        broker_url = %config.default_broker.broker_url,
        "application state ready"
    );

    let app = routes::router(state);

    tracing::info!("depot admin API listening on {}", config.bind_addr);

    axum::serve(
        tokio::net::TcpListener::bind(config.bind_addr)
            .await
            .expect("failed to bind address"),
        app,
    )
    .await
    .expect("server error");
}
