use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use tracing::debug;

use crate::{
    dto::{AliasResponse, CreateAliasRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/aliases", get(get_all_aliases).post(create_alias))
        .route("/aliases/{id}", delete(delete_alias))
}

async fn get_all_aliases(
    State(state): State<AppState>,
) -> Result<Json<Vec<AliasResponse>>, ApiError> {
    let aliases = state.aliases.get_aliases.get_all().await?;
    debug!(count = aliases.len(), "Aliases retrieved successfully");
    Ok(Json(
        aliases.into_iter().map(AliasResponse::from_alias).collect(),
    ))
}

async fn create_alias(
    State(state): State<AppState>,
    Json(req): Json<CreateAliasRequest>,
) -> Result<(StatusCode, Json<AliasResponse>), ApiError> {
    let alias = state
        .aliases
        .create_alias
        .execute(
            req.hostname,
            req.target_id,
            req.ttl.unwrap_or(state.default_ttl),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AliasResponse::from_alias(alias))))
}

async fn delete_alias(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.aliases.delete_alias.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
