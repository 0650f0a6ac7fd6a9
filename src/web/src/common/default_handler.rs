use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

const INDEX_FILE: &str = "index.html";

fn cache_control_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("woff2" | "woff" | "ttf" | "otf") => "public, max-age=31536000, immutable",
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "ico") => "public, max-age=86400",
        Some("html") => "no-cache",
        _ => "public, max-age=3600",
    }
}

/// Serves static files from the embedded assets, `/` maps to index.html
pub async fn default_handler(uri: axum::http::Uri) -> axum::response::Response {
    let path_str = match uri.path().trim_start_matches('/') {
        "" => INDEX_FILE,
        path => path,
    };

    if let Some(content) = Assets::get(path_str) {
        let mime = mime_guess::from_path(path_str).first_or_octet_stream();
        return (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.to_string()),
                (header::CACHE_CONTROL, cache_control_for(path_str).to_string()),
            ],
            content.data,
        )
            .into_response();
    }

    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, "text/plain".to_string()),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        axum::body::Bytes::from_static(b"404 Not Found"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for() {
        assert_eq!(cache_control_for("fonts/a.woff2"), "public, max-age=31536000, immutable");
        assert_eq!(cache_control_for("logo.svg"), "public, max-age=86400");
        assert_eq!(cache_control_for("index.html"), "no-cache");
        assert_eq!(cache_control_for("app.js"), "public, max-age=3600");
    }

    #[test]
    fn test_index_is_embedded() {
        assert!(Assets::get(INDEX_FILE).is_some());
    }
}
