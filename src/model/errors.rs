use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ApiError = (StatusCode, Json<ServerError>);

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ServerError {
    pub error_message: String,
}

impl ServerError {
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        ServerError {
            error_message: message.into(),
        }
    }
}
