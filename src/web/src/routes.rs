use crate::GameAppData;
use crate::chat::chat_routes;
use crate::common::default_handler::default_handler;
use crate::compare::compare_routes;
use crate::face::face_routes;
use crate::health::health_routes;
use crate::player::player_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<GameAppData> {
        Router::<GameAppData>::new()
            .merge(health_routes())
            .merge(player_routes())
            .merge(compare_routes())
            .merge(chat_routes())
            .merge(face_routes())
            .fallback(default_handler)
    }
}
