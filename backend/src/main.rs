use std::sync::Arc;
use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Response};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};
use shared::constants::HEALTH_CHECK_ENDPOINT;

use crate::config::Config;
use crate::games::backend_wheel_game::create_router as create_wheel_game_router;
use crate::services::prize_sheet::PrizeSheet;

mod config;
mod error;
mod games;
mod logging;
mod services;

#[derive(Clone)]
pub struct AppState {
    sheet: Arc<PrizeSheet>,
}

pub async fn health_check() -> impl IntoResponse {
    Response::new(Body::from("OK"))
}

fn build_app(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origins.clone())
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![header::CONTENT_TYPE]);

    if !config.static_dir.exists() {
        warn!("Static dir {} not found; only the API is served", config.static_dir.display());
    }

    // Unknown paths fall through to index.html so client-side routes survive a reload
    let static_service = ServeDir::new(&config.static_dir)
        .fallback(ServeFile::new(config.static_dir.join("index.html")));

    Router::new()
        .route(HEALTH_CHECK_ENDPOINT, axum::routing::get(health_check))
        .merge(create_wheel_game_router())
        .layer(cors)
        .with_state(state)
        .fallback_service(static_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = Config::from_env()?;
    let state = AppState {
        sheet: Arc::new(PrizeSheet::load(&config.prize_sheet_path)?),
    };

    let app = build_app(state, &config);

    info!("listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
