pub mod routes;

use crate::GameAppData;
use axum::Json;
use axum::Router;
use axum::extract::State;
use serde::Serialize;

pub fn health_routes() -> Router<GameAppData> {
    routes::routes()
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub players: usize,
}

async fn health_action(State(state): State<GameAppData>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        players: state.database.players.len(),
    })
}
