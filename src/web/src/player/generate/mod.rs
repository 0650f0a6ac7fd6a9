pub mod routes;

use crate::error::PLAYER_NAME_REQUIRED;
use crate::face::enrich;
use crate::{ApiError, ApiResult, GameAppData};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use database::PlayerResolver;
use nba_core::Player;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlayerRequest {
    #[serde(default)]
    pub player_name: Option<String>,
}

pub async fn player_generate_action(
    State(state): State<GameAppData>,
    payload: Result<Json<GeneratePlayerRequest>, JsonRejection>,
) -> ApiResult<Json<Player>> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();

    let name = request
        .player_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest(PLAYER_NAME_REQUIRED.to_string()))?;

    let player = PlayerResolver::new(&state.database.players).generate_or_lookup(&name)?;

    Ok(Json(enrich(player, &state.config)))
}
