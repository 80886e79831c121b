use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::{
    dto::{UpdateLogQuery, UpdateLogResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/logs", get(get_recent_logs))
        .route("/hosts/{id}/logs", get(get_host_logs))
}

async fn get_recent_logs(
    State(state): State<AppState>,
    Query(params): Query<UpdateLogQuery>,
) -> Result<Json<Vec<UpdateLogResponse>>, ApiError> {
    let logs = state
        .get_update_logs
        .get_recent(params.effective_limit())
        .await?;
    Ok(Json(logs.into_iter().map(UpdateLogResponse::from_log).collect()))
}

async fn get_host_logs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UpdateLogQuery>,
) -> Result<Json<Vec<UpdateLogResponse>>, ApiError> {
    let logs = state
        .get_update_logs
        .get_by_host(id, params.effective_limit())
        .await?;
    Ok(Json(logs.into_iter().map(UpdateLogResponse::from_log).collect()))
}
