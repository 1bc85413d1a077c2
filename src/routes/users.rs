use axum::{extract::State, Json};
use serde_json::json;

use crate::{
    error::AdminError,
    extract::{ValidJson, ValidPath, ValidQuery},
    models::{CreateUserRequest, UpdateUserRequest, UserFilter, UserPage, UserRecord},
    state::AppState,
    users, validation,
};

pub async fn list_users(
    State(state): State<AppState>,
    ValidQuery(filter): ValidQuery<UserFilter>,
) -> Json<UserPage> {
    Json(state.users.list(&filter))
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> Result<Json<UserRecord>, AdminError> {
    let user = validation::new_user(payload)?;
    let record = state.users.add(user);

    state.audit.record(
        "user.create",
        json!({ "id": record.id, "username": record.username, "userType": record.user_type }),
    );

    Ok(Json(record))
}

pub async fn update_user(
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<u64>,
    ValidJson(payload): ValidJson<UpdateUserRequest>,
) -> Result<Json<UserRecord>, AdminError> {
    let patch = validation::user_patch(payload)?;
    let Some(record) = state.users.update(user_id, patch) else {
        return Err(AdminError::NotFound);
    };

    state.audit.record(
        "user.update",
        json!({ "id": record.id, "username": record.username, "userType": record.user_type }),
    );

    Ok(Json(record))
}

pub async fn delete_user(
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<u64>,
) -> Result<Json<UserRecord>, AdminError> {
    let Some(record) = state.users.delete(user_id) else {
        return Err(AdminError::NotFound);
    };

    state.audit.record("user.delete", json!({ "id": record.id }));

    Ok(Json(record))
}

pub async fn list_user_types() -> Json<Vec<&'static str>> {
    Json(users::user_types())
}
