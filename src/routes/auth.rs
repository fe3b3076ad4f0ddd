use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::dto::auth_dto::LoginRequest;
use crate::error::{Error, Result};
use crate::services::session_service::{SessionService, SESSION_COOKIE};
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let password = payload.password.unwrap_or_default();
    if password.is_empty() {
        return Err(Error::BadRequest("Ingresa la contraseña.".into()));
    }

    if !state.session_service.password_matches(&password)? {
        tracing::info!("admin login rejected");
        return Err(Error::Unauthorized("Contraseña incorrecta.".into()));
    }

    let token = state.session_service.issue()?;
    let cookie = session_cookie(&token, SessionService::max_age_secs());
    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(json!({ "message": "Ingreso correcto." })),
    ))
}

pub async fn logout() -> impl IntoResponse {
    let cookie = session_cookie("", 0);
    (
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(json!({ "message": "Sesión cerrada." })),
    )
}

fn session_cookie(value: &str, max_age: i64) -> String {
    format!("{SESSION_COOKIE}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}")
}
