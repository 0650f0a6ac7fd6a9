pub mod routes;

use crate::face::enrich;
use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use database::PlayerResolver;
use log::debug;
use nba_core::Player;

pub async fn player_get_action(
    State(state): State<GameAppData>,
    Path(name): Path<String>,
) -> ApiResult<Json<Player>> {
    let store = &state.database.players;
    let mut resolver = PlayerResolver::new(store);

    let player = if store.contains(&name) || !state.config.generate_missing_players {
        resolver.get(&name)?
    } else {
        debug!("player '{}' not in store, generating", name);
        resolver.generate_or_lookup(&name)?
    };

    Ok(Json(enrich(player, &state.config)))
}
