use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::services::session_service::{SessionService, SESSION_COOKIE};

/// Gate for the admin router: a valid session cookie or a uniform 401.
/// The response never reveals whether the requested resource exists.
pub async fn require_admin_session(
    State(sessions): State<SessionService>,
    req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(axum::http::header::COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(|raw| cookie_value(raw, SESSION_COOKIE));

    match token {
        Some(value) if sessions.verify(&value) => next.run(req).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "No autorizado." })),
        )
            .into_response(),
    }
}

fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::cookie_value;

    #[test]
    fn finds_cookie_among_many() {
        let header = "theme=dark; la_glorieta_admin=admin:1.aa; other=x";
        assert_eq!(
            cookie_value(header, "la_glorieta_admin").as_deref(),
            Some("admin:1.aa")
        );
    }

    #[test]
    fn missing_cookie_is_none() {
        assert!(cookie_value("theme=dark", "la_glorieta_admin").is_none());
    }
}
