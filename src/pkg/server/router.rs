use axum::routing::post;
use axum::{routing::get, Router};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/", get(home))
        .route("/api/chat", post(handlers::chat::converse))
        .route("/api/projects", get(handlers::projects::list))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
