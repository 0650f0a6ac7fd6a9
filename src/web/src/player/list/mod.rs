pub mod routes;

use crate::face::enrich;
use crate::GameAppData;
use axum::Json;
use axum::extract::State;
use nba_core::Player;

pub async fn player_list_action(State(state): State<GameAppData>) -> Json<Vec<Player>> {
    let players = state
        .database
        .players
        .all()
        .iter()
        .cloned()
        .map(|player| enrich(player, &state.config))
        .collect();

    Json(players)
}
