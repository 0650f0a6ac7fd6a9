mod chat;
mod common;
mod compare;
mod config;
mod error;
mod face;
mod health;
mod player;
mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::Router;
use axum::response::IntoResponse;
use database::DatabaseEntity;
use log::{error, info};
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

pub struct NbaLegendsServer {
    data: GameAppData,
}

impl NbaLegendsServer {
    pub fn new(data: GameAppData) -> Self {
        NbaLegendsServer { data }
    }

    pub fn app(&self) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("Internal server error - handler panicked".to_string())
                            .into_response()
                    }))
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self) -> io::Result<()> {
        let addr = self.data.config.socket_addr();

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                return Err(e);
            }
        };

        info!("listen at: http://{}", addr);

        if let Err(e) = axum::serve(listener, self.app()).await {
            error!("Server error: {}", e);
            return Err(e);
        }

        Ok(())
    }
}

pub struct GameAppData {
    pub database: Arc<DatabaseEntity>,
    pub config: Arc<ServerConfig>,
}

impl GameAppData {
    pub fn new(database: DatabaseEntity, config: ServerConfig) -> Self {
        GameAppData {
            database: Arc::new(database),
            config: Arc::new(config),
        }
    }
}

impl Clone for GameAppData {
    fn clone(&self) -> Self {
        GameAppData {
            database: Arc::clone(&self.database),
            config: Arc::clone(&self.config),
        }
    }
}
