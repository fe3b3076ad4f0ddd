use crate::error::{Error, Result};
use crate::models::incident::{Incident, SEVERITY_OPTIONS, TYPE_OPTIONS};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct IncidentService {
    pool: PgPool,
}

impl IncidentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends a factual record. Incidents carry no update or delete path;
    /// history stays as written.
    pub async fn record(
        &self,
        candidate_id: Uuid,
        incident_type: &str,
        severity: &str,
        summary: &str,
        details: Option<String>,
        evidence_url: Option<String>,
    ) -> Result<Incident> {
        if !TYPE_OPTIONS.contains(&incident_type) {
            return Err(Error::BadRequest("Tipo de incidente inválido.".into()));
        }
        if !SEVERITY_OPTIONS.contains(&severity) {
            return Err(Error::BadRequest("Severidad inválida.".into()));
        }
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(Error::BadRequest("El resumen es obligatorio.".into()));
        }

        let details = details.map(|d| d.trim().to_string()).filter(|d| !d.is_empty());
        let evidence_url = evidence_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        let incident = sqlx::query_as::<_, Incident>(
            "INSERT INTO incidents \
                 (candidate_id, incident_type, severity, summary, details, evidence_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, candidate_id, incident_type, severity, summary, details, \
                 evidence_url, created_at",
        )
        .bind(candidate_id)
        .bind(incident_type)
        .bind(severity)
        .bind(summary)
        .bind(details)
        .bind(evidence_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(incident)
    }

    pub async fn list_for_candidate(&self, candidate_id: Uuid) -> Result<Vec<Incident>> {
        let incidents = sqlx::query_as::<_, Incident>(
            "SELECT id, candidate_id, incident_type, severity, summary, details, \
                 evidence_url, created_at \
             FROM incidents WHERE candidate_id = $1 ORDER BY created_at DESC",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(incidents)
    }
}
