pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
pub mod models;
pub mod state;

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use crate::{
    auth::SessionVerifier, config::Config, db::SupabaseClient, errors::AppError, state::AppState,
};

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(http::create_http_routes(state))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let supabase = Arc::new(SupabaseClient::from_config(&config));
    let state = AppState {
        feedback: supabase.clone(),
        auth: supabase,
        sessions: SessionVerifier::new(&config.jwt_secret),
        cookie_secure: config.cookie_secure,
    };

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(
        "Feedback collector running at http://127.0.0.1:{}/",
        config.port
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
