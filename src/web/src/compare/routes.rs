use crate::GameAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<GameAppData> {
    Router::new().route("/api/compare", post(super::compare_action))
}
