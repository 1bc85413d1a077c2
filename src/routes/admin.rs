use axum::{extract::State, Json};

use crate::{
    audit::AuditLogEntry,
    extract::{AdminCredential, ValidQuery},
    state::AppState,
};

#[derive(serde::Deserialize)]
pub struct AuditLogQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn list_audit_logs(
    State(state): State<AppState>,
    _admin: AdminCredential,
    ValidQuery(params): ValidQuery<AuditLogQuery>,
) -> Json<Vec<AuditLogEntry>> {
    let limit = params.limit.unwrap_or(100).clamp(1, 200);
    let offset = params.offset.unwrap_or(0).max(0);

    Json(state.audit.list(limit as usize, offset as usize))
}
