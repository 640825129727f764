use crate::model::app_state::AppState;
use crate::model::browser_view::SearchQuery;
use crate::model::errors::{ApiError, ServerError};
use crate::shared::render::render_page;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

pub async fn get_index(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    match extract_query(query) {
        Ok(query) => {
            let view = state.browser.search(query).await;
            Html(render_page(&view)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_characters(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    match extract_query(query) {
        Ok(query) => {
            let view = state.browser.search(query).await;
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_view(State(state): State<AppState>) -> Response {
    let view = state.browser.view().await;
    (StatusCode::OK, Json(view)).into_response()
}

fn extract_query(query: Result<Query<SearchQuery>, QueryRejection>) -> Result<SearchQuery, ApiError> {
    query.map(|Query(query)| query).map_err(|e| {
        let error_message = format!("Invalid search parameters: {}", e.body_text());
        tracing::error!("{}", &error_message);
        (
            StatusCode::BAD_REQUEST,
            Json(ServerError::with_message(error_message)),
        )
    })
}
