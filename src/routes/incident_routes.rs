use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::dto::incident_dto::{CreateIncidentRequest, ListIncidentsQuery};
use crate::error::{Error, Result};
use crate::AppState;

pub async fn create_incident(
    State(state): State<AppState>,
    Json(payload): Json<CreateIncidentRequest>,
) -> Result<impl IntoResponse> {
    state
        .candidate_service
        .get(payload.candidate_id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidato no encontrado.".into()))?;

    let incident = state
        .incident_service
        .record(
            payload.candidate_id,
            payload.incident_type.as_deref().unwrap_or(""),
            payload.severity.as_deref().unwrap_or(""),
            payload.summary.as_deref().unwrap_or(""),
            payload.details,
            payload.evidence_url,
        )
        .await?;
    tracing::info!(
        candidate_id = %incident.candidate_id,
        severity = %incident.severity,
        "incident recorded"
    );

    state
        .audit_service
        .log_best_effort(
            "CREATE_INCIDENT",
            "Incident",
            incident.id,
            Some(incident.candidate_id),
            Some(json!({
                "type": incident.incident_type,
                "severity": incident.severity,
            })),
        )
        .await;

    Ok((StatusCode::CREATED, Json(incident)))
}

pub async fn list_incidents(
    State(state): State<AppState>,
    Query(query): Query<ListIncidentsQuery>,
) -> Result<impl IntoResponse> {
    let candidate_id = query
        .candidate_id
        .ok_or_else(|| Error::BadRequest("candidateId es requerido.".into()))?;
    let incidents = state.incident_service.list_for_candidate(candidate_id).await?;
    Ok(Json(incidents))
}
