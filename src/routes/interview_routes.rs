use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::dto::interview_dto::{CreateInterviewRequest, ListInterviewsQuery};
use crate::error::{Error, Result};
use crate::models::interview::SOURCE_OPTIONS;
use crate::services::decision_service::{Decision, DecisionService};
use crate::services::interview_service::NewInterview;
use crate::utils::time::parse_date;
use crate::AppState;

pub async fn create_interview(
    State(state): State<AppState>,
    Json(payload): Json<CreateInterviewRequest>,
) -> Result<impl IntoResponse> {
    state
        .candidate_service
        .get(payload.candidate_id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidato no encontrado.".into()))?;

    let score =
        DecisionService::evaluate(payload.punctuality, payload.attitude, payload.teamwork)?;

    // An explicit admin decision overrides the suggestion; anything not in
    // the enumerated set falls back to it.
    let decision = payload
        .decision
        .as_deref()
        .and_then(Decision::parse)
        .unwrap_or(score.suggested_decision);

    let can_start_date = match payload
        .can_start_date
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
    {
        None => None,
        Some(raw) => Some(
            parse_date(raw).ok_or_else(|| Error::BadRequest("Fecha de inicio inválida.".into()))?,
        ),
    };

    let interview = state
        .interview_service
        .create(NewInterview {
            candidate_id: payload.candidate_id,
            punctuality: payload.punctuality,
            attitude: payload.attitude,
            teamwork: payload.teamwork,
            total_score: score.total_score,
            decision: decision.as_str().to_string(),
            availability: payload
                .availability
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            expected_salary: payload
                .expected_salary
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            can_start_date,
            source: payload
                .source
                .filter(|s| SOURCE_OPTIONS.contains(&s.as_str())),
        })
        .await?;
    tracing::info!(
        candidate_id = %interview.candidate_id,
        total_score = interview.total_score,
        "interview recorded"
    );

    state
        .audit_service
        .log_best_effort(
            "CREATE_INTERVIEW",
            "Interview",
            interview.id,
            Some(interview.candidate_id),
            Some(json!({
                "totalScore": interview.total_score,
                "decision": interview.decision,
                "suggestedDecision": score.suggested_decision.as_str(),
            })),
        )
        .await;

    Ok((StatusCode::CREATED, Json(interview)))
}

pub async fn list_interviews(
    State(state): State<AppState>,
    Query(query): Query<ListInterviewsQuery>,
) -> Result<impl IntoResponse> {
    let candidate_id = query
        .candidate_id
        .ok_or_else(|| Error::BadRequest("candidateId es requerido.".into()))?;
    let interviews = state.interview_service.list_for_candidate(candidate_id).await?;
    Ok(Json(interviews))
}
