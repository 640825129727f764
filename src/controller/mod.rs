use crate::model::app_state::AppState;
use crate::shared::constants::ASSET_DIRECTORY;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod character_controller;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(character_controller::get_index))
        .route("/api/characters", get(character_controller::get_characters))
        .route("/api/view", get(character_controller::get_view))
        .nest_service("/asset", ServeDir::new(ASSET_DIRECTORY))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
