pub mod routes;

use crate::error::MESSAGE_REQUIRED;
use crate::{ApiError, ApiResult, GameAppData};
use axum::Json;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use nba_core::{ChatTurn, ResponseSelector};
use serde::Deserialize;

pub fn chat_routes() -> Router<GameAppData> {
    routes::routes()
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

pub async fn chat_action(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatTurn>> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();

    let message = request
        .message
        .filter(|message| !message.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest(MESSAGE_REQUIRED.to_string()))?;

    let turn = ResponseSelector::respond_with_context(&message, request.context.as_deref());

    Ok(Json(turn))
}
