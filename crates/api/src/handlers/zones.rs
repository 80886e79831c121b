use axum::{extract::State, Json};

use crate::{dto::ZonesResponse, state::AppState};

pub async fn get_zones(State(state): State<AppState>) -> Json<ZonesResponse> {
    Json(ZonesResponse {
        zones: state.zones.zones().iter().map(|z| z.to_string()).collect(),
    })
}
