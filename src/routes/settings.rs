use axum::{extract::State, Json};
use serde_json::json;

use crate::{
    error::AdminError,
    extract::ValidJson,
    models::{
        BrokerSettingsResponse, BrokerSettingsView, PriceTable, ResetBrokerRequest,
        UpdateBrokerRequest, UpdatePricesRequest,
    },
    state::AppState,
    validation,
};

pub async fn get_broker_settings(State(state): State<AppState>) -> Json<BrokerSettingsView> {
    Json(state.settings.broker_settings())
}

pub async fn update_broker_settings(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UpdateBrokerRequest>,
) -> Result<Json<BrokerSettingsResponse>, AdminError> {
    validation::broker_url(&payload.broker_url)?;
    let broker_url = payload.broker_url.trim().to_string();

    let result = state.settings.update_broker_settings(
        broker_url.clone(),
        payload.username,
        payload.password,
        &payload.admin_password,
    );
    let data = match result {
        Ok(data) => data,
        Err(error) => {
            state.audit.record(
                "settings.broker.update_denied",
                json!({ "brokerUrl": broker_url }),
            );
            return Err(error);
        }
    };

    state.audit.record("settings.broker.update", json!({ "brokerUrl": broker_url }));

    Ok(Json(BrokerSettingsResponse {
        success: true,
        message: "Broker settings updated".into(),
        data,
    }))
}

pub async fn reset_broker_settings(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ResetBrokerRequest>,
) -> Result<Json<BrokerSettingsResponse>, AdminError> {
    let data = match state.settings.reset_broker_settings(&payload.admin_password) {
        Ok(data) => data,
        Err(error) => {
            state.audit.record("settings.broker.reset_denied", json!({}));
            return Err(error);
        }
    };

    state
        .audit
        .record("settings.broker.reset", json!({ "brokerUrl": data.broker_url }));

    Ok(Json(BrokerSettingsResponse {
        success: true,
        message: "Broker settings reset to defaults".into(),
        data,
    }))
}

pub async fn get_price_settings(State(state): State<AppState>) -> Json<PriceTable> {
    Json(state.settings.price_settings())
}

pub async fn update_price_settings(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UpdatePricesRequest>,
) -> Result<Json<PriceTable>, AdminError> {
    let prices = state.settings.update_price_settings(payload)?;

    state.audit.record(
        "settings.prices.update",
        json!({
            "gasolinePrice": payload.gasoline_price,
            "dieselPrice": payload.diesel_price,
            "electricityPrice": payload.electricity_price,
        }),
    );

    Ok(Json(prices))
}
