use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::dto::candidate_dto::{
    CandidateDetailResponse, CreateCandidateRequest, ListCandidatesQuery,
    UpdateCandidateRequest, UpdateCandidateResponse,
};
use crate::error::{Error, Result};
use crate::models::candidate::{REHIRE_OPTIONS, STATUS_OPTIONS};
use crate::services::candidate_service::{CandidateChanges, CandidateFilter};
use crate::utils::time::parse_date;
use crate::AppState;

/// Public intake from the application form; everything else under
/// /api/candidates sits behind the admin session.
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidateRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let full_name = payload.full_name.trim();
    let phone = payload.phone.trim();
    let position = payload.position.trim();
    if full_name.is_empty() || phone.is_empty() || position.is_empty() {
        return Err(Error::BadRequest(
            "fullName, phone y position son obligatorios.".into(),
        ));
    }

    let candidate = state
        .candidate_service
        .create(full_name, phone, position, payload.experience)
        .await?;
    tracing::info!(candidate_id = %candidate.id, "candidate registered");

    state
        .audit_service
        .log_best_effort(
            "CREATE_CANDIDATE",
            "Candidate",
            candidate.id,
            Some(candidate.id),
            Some(json!({ "fullName": candidate.full_name, "position": candidate.position })),
        )
        .await;

    Ok((StatusCode::CREATED, Json(candidate)))
}

pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<ListCandidatesQuery>,
) -> Result<impl IntoResponse> {
    let status = query.status.filter(|s| !s.is_empty());
    if let Some(status) = status.as_deref() {
        if !STATUS_OPTIONS.contains(&status) {
            return Err(Error::BadRequest("Estado inválido.".into()));
        }
    }
    let rehire_status = query.rehire_status.filter(|s| !s.is_empty());
    if let Some(rehire) = rehire_status.as_deref() {
        if !REHIRE_OPTIONS.contains(&rehire) {
            return Err(Error::BadRequest(
                "Estado de recontratación inválido.".into(),
            ));
        }
    }

    let filter = CandidateFilter {
        q: query.q,
        status,
        rehire_status,
        sort: query.sort,
    };
    let candidates = state.candidate_service.list(&filter).await?;
    Ok(Json(candidates))
}

pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidato no encontrado.".into()))?;

    let interviews = state.interview_service.list_for_candidate(id).await?;
    let incidents = state.incident_service.list_for_candidate(id).await?;
    let has_high_severity_incidents =
        state.candidate_service.has_high_severity_incidents(id).await?;

    Ok(Json(CandidateDetailResponse {
        candidate,
        interviews,
        incidents,
        has_high_severity_incidents,
    }))
}

pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCandidateRequest>,
) -> Result<impl IntoResponse> {
    state
        .candidate_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidato no encontrado.".into()))?;

    let mut changes = CandidateChanges::default();
    let mut changed = serde_json::Map::new();

    if let Some(status) = payload.status.filter(|s| !s.is_empty()) {
        if !STATUS_OPTIONS.contains(&status.as_str()) {
            return Err(Error::BadRequest("Estado inválido.".into()));
        }
        changed.insert("status".into(), json!(status));
        changes.status = Some(status);
    }

    if let Some(notes) = payload.notes {
        let notes = notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        changed.insert("notes".into(), json!(notes));
        changes.notes = Some(notes);
    }

    if let Some(raw) = payload.next_follow_up_at {
        let parsed = match raw.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            None => None,
            Some(raw) => Some(
                parse_date(raw)
                    .ok_or_else(|| Error::BadRequest("Fecha de seguimiento inválida.".into()))?,
            ),
        };
        changed.insert(
            "nextFollowUpAt".into(),
            json!(parsed.map(|d| d.to_rfc3339())),
        );
        changes.next_follow_up_at = Some(parsed);
    }

    if let Some(rehire) = payload.rehire_status.filter(|s| !s.is_empty()) {
        if !REHIRE_OPTIONS.contains(&rehire.as_str()) {
            return Err(Error::BadRequest(
                "Estado de recontratación inválido.".into(),
            ));
        }
        changed.insert("rehireStatus".into(), json!(rehire));
        changes.rehire_status = Some(rehire);
    }

    if let Some(reason) = payload.rehire_reason {
        let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());
        changed.insert("rehireReason".into(), json!(reason));
        changes.rehire_reason = Some(reason);
    }

    let candidate = state.candidate_service.update(id, &changes).await?;

    state
        .audit_service
        .log_best_effort(
            "UPDATE_CANDIDATE",
            "Candidate",
            candidate.id,
            Some(candidate.id),
            Some(json!(changed)),
        )
        .await;

    // Advisory only: a HIGH-severity incident prompts, never forces, a
    // rehire decision.
    let warning = if changes.rehire_status.is_some()
        && state.candidate_service.has_high_severity_incidents(id).await?
    {
        Some("El candidato tiene incidentes de severidad alta.".to_string())
    } else {
        None
    };

    Ok(Json(UpdateCandidateResponse { candidate, warning }))
}
