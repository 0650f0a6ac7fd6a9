mod generator;
pub mod routes;

use axum::Router;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use nba_core::Player;

use generator::generate_face_svg;

use crate::{GameAppData, ServerConfig};

pub fn face_routes() -> Router<GameAppData> {
    routes::routes()
}

/// Canonical key with whitespace runs replaced by '-'.
pub fn player_slug(name: &str) -> String {
    Player::canonicalize(name)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn face_url(name: &str) -> String {
    format!("/api/players/{}/face.svg", player_slug(name))
}

/// Attaches the initials avatar url unless images are disabled or the
/// record already carries one.
pub fn enrich(player: Player, config: &ServerConfig) -> Player {
    if !config.player_images || player.image_url.is_some() {
        return player;
    }

    let url = face_url(&player.name);
    player.with_image_url(url)
}

async fn face_action(Path(slug): Path<String>) -> impl IntoResponse {
    let svg = generate_face_svg(&slug);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (
                header::CACHE_CONTROL,
                "public, max-age=86400, immutable",
            ),
        ],
        svg,
    )
}
