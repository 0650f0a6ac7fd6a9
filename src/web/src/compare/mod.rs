pub mod routes;

use crate::face::enrich;
use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use database::PlayerResolver;
use log::debug;
use nba_core::ComparisonResult;
use serde::Deserialize;

pub fn compare_routes() -> Router<GameAppData> {
    routes::routes()
}

#[derive(Debug, Default, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub players: Vec<String>,
}

pub async fn compare_action(
    State(state): State<GameAppData>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> ApiResult<Json<ComparisonResult>> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();

    let mut result = PlayerResolver::new(&state.database.players).compare(request.players.as_slice())?;

    debug!("compare: {}", request.players.join(", "));

    result.players = result
        .players
        .into_iter()
        .map(|player| enrich(player, &state.config))
        .collect();

    Ok(Json(result))
}
