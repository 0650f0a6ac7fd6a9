use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::LookupError;
use serde_json::json;

pub use database::PLAYER_NAME_REQUIRED;

pub const AT_LEAST_TWO_PLAYERS: &str = "Please provide at least 2 players to compare";
pub const MESSAGE_REQUIRED: &str = "Message is required";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(_) => ApiError::NotFound(err.to_string()),
            LookupError::InsufficientInput { .. } => {
                ApiError::BadRequest(AT_LEAST_TWO_PLAYERS.to_string())
            }
            LookupError::MalformedRequest(reason) => ApiError::BadRequest(reason),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_map_to_api_errors() {
        assert_eq!(
            ApiError::from(LookupError::NotFound("Dirk Nowitzki".to_string())),
            ApiError::NotFound("Player not found: Dirk Nowitzki".to_string())
        );
        assert_eq!(
            ApiError::from(LookupError::InsufficientInput { provided: 1 }),
            ApiError::BadRequest(AT_LEAST_TWO_PLAYERS.to_string())
        );
        assert_eq!(
            ApiError::from(LookupError::MalformedRequest(PLAYER_NAME_REQUIRED.to_string())),
            ApiError::BadRequest(PLAYER_NAME_REQUIRED.to_string())
        );
    }

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::NotFound("x".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let bad_request = ApiError::BadRequest("x".to_string()).into_response();
        assert_eq!(bad_request.status(), StatusCode::BAD_REQUEST);

        let internal = ApiError::InternalError("x".to_string()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
