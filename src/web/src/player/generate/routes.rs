use crate::GameAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<GameAppData> {
    Router::new().route("/api/generate-player", post(super::player_generate_action))
}
