use axum::{
    routing::{get, post},
    Router,
};
use np_core::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod components;
pub mod handlers;
pub mod pages;
pub mod state;
pub mod views;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::home))
        .route("/search", get(handlers::search))
        .route("/theme", post(handlers::toggle_theme))
        .route("/api/news", get(handlers::api_news))
        .route("/api/summary", get(handlers::api_summary))
        .route("/api/search", get(handlers::api_search))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌍 Naijpedia listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::views::{HomeSession, HomeView, SearchSession, SearchView};
    pub use crate::{create_app, serve, AppState};
    pub use np_core::{Error, Result};
}
