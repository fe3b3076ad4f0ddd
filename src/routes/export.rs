use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::dto::candidate_dto::ExportCandidatesQuery;
use crate::error::{Error, Result};
use crate::models::candidate::{REHIRE_OPTIONS, STATUS_OPTIONS};
use crate::services::candidate_service::ExportFilter;
use crate::services::export_service::ExportService;
use crate::utils::time::parse_date;
use crate::AppState;

/// Streams the filtered candidate list as CSV.
pub async fn export_candidates(
    State(state): State<AppState>,
    Query(query): Query<ExportCandidatesQuery>,
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

    let date_from = match query.date_from.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        None => None,
        Some(raw) => Some(
            parse_date(raw).ok_or_else(|| Error::BadRequest("Rango de fechas inválido.".into()))?,
        ),
    };
    let date_to = match query.date_to.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        None => None,
        Some(raw) => Some(
            parse_date(raw).ok_or_else(|| Error::BadRequest("Rango de fechas inválido.".into()))?,
        ),
    };

    let filter = ExportFilter {
        status,
        rehire_status,
        date_from,
        date_to,
    };
    let rows = state.candidate_service.export_rows(&filter).await?;
    let csv = ExportService::candidates_csv(&rows)?;

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=export-candidatos.csv".to_string(),
            ),
        ],
        csv,
    ))
}
