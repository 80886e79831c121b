use axum::{
    extract::{ConnectInfo, Query, State},
    http::{
        header::{USER_AGENT, WWW_AUTHENTICATE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use dyndns_application::use_cases::{IpUpdateOutcome, IpUpdateRequest};
use serde::Deserialize;
use std::net::SocketAddr;
use tracing::{debug, error};

use crate::{
    state::AppState,
    utils::{basic_credentials, forwarded_public_ip},
};

/// Every path a dyndns client may call.
pub const UPDATE_PATHS: [&str; 4] = ["/update", "/nic/update", "/v2/update", "/v3/update"];

#[derive(Debug, Default, Deserialize)]
pub struct UpdateParams {
    pub hostname: Option<String>,
    pub myip: Option<String>,
}

pub fn routes() -> Router<AppState> {
    UPDATE_PATHS
        .iter()
        .fold(Router::new(), |router, path| {
            router.route(path, get(update_ip))
        })
}

async fn update_ip(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(params): Query<UpdateParams>,
) -> Response {
    let Some((username, password)) = basic_credentials(&headers) else {
        debug!(%peer, "Update without credentials");
        return bad_auth();
    };

    let caller_ip = forwarded_public_ip(&headers).unwrap_or_else(|| peer.ip());
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let request = IpUpdateRequest {
        username,
        password,
        hostname: params.hostname,
        myip: params.myip,
        caller_ip: Some(caller_ip),
        user_agent,
    };

    match state.update_ip.execute(request).await {
        Ok(IpUpdateOutcome::BadAuth) => bad_auth(),
        Ok(outcome) => (status_for(outcome), outcome.reply()).into_response(),
        Err(e) => {
            error!(%peer, error = %e, "Update failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                IpUpdateOutcome::DnsErr.reply(),
            )
                .into_response()
        }
    }
}

fn status_for(outcome: IpUpdateOutcome) -> StatusCode {
    match outcome {
        IpUpdateOutcome::Good(_) | IpUpdateOutcome::NoChange(_) => StatusCode::OK,
        IpUpdateOutcome::BadAuth => StatusCode::UNAUTHORIZED,
        IpUpdateOutcome::NotFqdn | IpUpdateOutcome::BadRequest => StatusCode::BAD_REQUEST,
        IpUpdateOutcome::DnsErr => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn bad_auth() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(WWW_AUTHENTICATE, "Basic realm=\"dyndns\"")],
        IpUpdateOutcome::BadAuth.reply(),
    )
        .into_response()
}
