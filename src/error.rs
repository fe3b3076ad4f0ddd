use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::Validation(errors) => (StatusCode::BAD_REQUEST, first_validation_message(&errors)),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Database(err) => {
                tracing::error!(error = ?err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno.".to_string())
            }
            Error::Config(msg) => {
                tracing::error!(detail = %msg, "configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            Error::Csv(err) => {
                tracing::error!(error = ?err, "csv export error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno.".to_string())
            }
            Error::Anyhow(err) => {
                tracing::error!(error = ?err, "unexpected error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno.".to_string())
            }
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|list| list.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Datos inválidos.".to_string())
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Recurso no encontrado.".to_string()),
            other => Error::Database(other),
        }
    }
}
