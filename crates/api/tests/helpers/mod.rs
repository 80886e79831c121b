#![allow(dead_code)]

use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{Request, StatusCode},
    Router,
};
use dyndns_api::{
    create_api_routes,
    state::{AliasUseCases, HostUseCases},
    AppState,
};
use dyndns_application::ports::{
    AliasRepository, HostRepository, PasswordHasher, UpdateLogRepository,
};
use dyndns_application::use_cases::*;
use dyndns_domain::ZoneMatcher;
use dyndns_infrastructure::{
    auth::Argon2PasswordHasher,
    database::run_migrations,
    repositories::{SqliteAliasRepository, SqliteHostRepository, SqliteUpdateLogRepository},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

pub const PEER: &str = "198.51.100.200:51000";
pub const API_KEY: &str = "test-api-key";

pub async fn create_test_db() -> sqlx::SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn create_test_app() -> Router {
    create_test_app_with_key(None).await
}

pub async fn create_test_app_with_key(api_key: Option<&str>) -> Router {
    let pool = create_test_db().await;

    let host_repo: Arc<dyn HostRepository> = Arc::new(SqliteHostRepository::new(pool.clone()));
    let alias_repo: Arc<dyn AliasRepository> = Arc::new(SqliteAliasRepository::new(pool.clone()));
    let log_repo: Arc<dyn UpdateLogRepository> =
        Arc::new(SqliteUpdateLogRepository::new(pool.clone()));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let zones = Arc::new(ZoneMatcher::new(["example.com", "example.org"]));

    let state = AppState {
        hosts: HostUseCases {
            get_hosts: Arc::new(GetHostsUseCase::new(host_repo.clone())),
            create_host: Arc::new(CreateHostUseCase::new(
                host_repo.clone(),
                alias_repo.clone(),
                hasher.clone(),
                zones.clone(),
            )),
            update_host: Arc::new(UpdateHostUseCase::new(host_repo.clone(), hasher.clone())),
            delete_host: Arc::new(DeleteHostUseCase::new(host_repo.clone())),
        },
        aliases: AliasUseCases {
            get_aliases: Arc::new(GetAliasesUseCase::new(alias_repo.clone())),
            create_alias: Arc::new(CreateAliasUseCase::new(
                alias_repo.clone(),
                host_repo.clone(),
            )),
            delete_alias: Arc::new(DeleteAliasUseCase::new(alias_repo.clone())),
        },
        get_update_logs: Arc::new(GetUpdateLogsUseCase::new(log_repo.clone(), host_repo.clone())),
        update_ip: Arc::new(UpdateHostIpUseCase::new(host_repo, log_repo, hasher)),
        zones,
        default_ttl: 300,
        api_key: api_key.map(Arc::from),
    };

    let peer: SocketAddr = PEER.parse().unwrap();
    create_api_routes(state).layer(MockConnectInfo(peer))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Creates `home.example.com` owned by `alice-home` / `s3cret-pass`.
pub async fn create_home_host(app: &Router, ip: Option<&str>) -> i64 {
    let (status, body) = send_json(
        app,
        json_request(
            "POST",
            "/api/hosts",
            serde_json::json!({
                "hostname": "home",
                "domain": "example.com",
                "ip": ip,
                "ttl": 60,
                "username": "alice-home",
                "password": "s3cret-pass"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}
