use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use dyndns_application::use_cases::{CreateHostCommand, UpdateHostCommand};
use dyndns_domain::DomainError;
use tracing::{debug, info};

use crate::{
    dto::{CreateHostRequest, HostResponse, UpdateHostRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hosts", get(get_all_hosts).post(create_host))
        .route(
            "/hosts/{id}",
            get(get_host_by_id).put(update_host).delete(delete_host),
        )
}

async fn get_all_hosts(State(state): State<AppState>) -> Result<Json<Vec<HostResponse>>, ApiError> {
    let hosts = state.hosts.get_hosts.get_all().await?;
    debug!(count = hosts.len(), "Hosts retrieved successfully");
    Ok(Json(hosts.into_iter().map(HostResponse::from_host).collect()))
}

async fn get_host_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<HostResponse>, ApiError> {
    let host = state
        .hosts
        .get_hosts
        .get_by_id(id)
        .await?
        .ok_or(ApiError(DomainError::HostNotFound(id)))?;
    Ok(Json(HostResponse::from_host(host)))
}

async fn create_host(
    State(state): State<AppState>,
    Json(req): Json<CreateHostRequest>,
) -> Result<(StatusCode, Json<HostResponse>), ApiError> {
    let host = state
        .hosts
        .create_host
        .execute(CreateHostCommand {
            hostname: req.hostname,
            domain: req.domain,
            ip: req.ip,
            ttl: req.ttl.unwrap_or(state.default_ttl),
            username: req.username,
            password: req.password,
        })
        .await?;

    info!(host = %host.full_domain(), "Host created via API");
    Ok((StatusCode::CREATED, Json(HostResponse::from_host(host))))
}

async fn update_host(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateHostRequest>,
) -> Result<Json<HostResponse>, ApiError> {
    let host = state
        .hosts
        .update_host
        .execute(
            id,
            UpdateHostCommand {
                ip: req.ip,
                ttl: req.ttl,
                username: req.username,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(HostResponse::from_host(host)))
}

async fn delete_host(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.hosts.delete_host.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
