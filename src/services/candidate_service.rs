use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateExportRow, CandidateListItem};
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

pub const LIST_LIMIT: i64 = 50;

const CANDIDATE_COLUMNS: &str = "id, full_name, phone, position, experience, status, notes, \
     next_follow_up_at, rehire_status, rehire_reason, created_at, updated_at";

#[derive(Debug, Default)]
pub struct CandidateFilter {
    pub q: Option<String>,
    pub status: Option<String>,
    pub rehire_status: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Default)]
pub struct CandidateChanges {
    pub status: Option<String>,
    pub notes: Option<Option<String>>,
    pub next_follow_up_at: Option<Option<DateTime<Utc>>>,
    pub rehire_status: Option<String>,
    pub rehire_reason: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct ExportFilter {
    pub status: Option<String>,
    pub rehire_status: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: &str,
        phone: &str,
        position: &str,
        experience: i32,
    ) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            "INSERT INTO candidates (full_name, phone, position, experience) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, full_name, phone, position, experience, status, notes, \
                 next_follow_up_at, rehire_status, rehire_reason, created_at, updated_at",
        )
        .bind(full_name)
        .bind(phone)
        .bind(position)
        .bind(experience)
        .fetch_one(&self.pool)
        .await?;
        Ok(candidate)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            "SELECT id, full_name, phone, position, experience, status, notes, \
                 next_follow_up_at, rehire_status, rehire_reason, created_at, updated_at \
             FROM candidates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }

    /// Filtered list view, capped at [`LIST_LIMIT`], each row carrying the
    /// latest interview outcome and the interview/incident counts.
    pub async fn list(&self, filter: &CandidateFilter) -> Result<Vec<CandidateListItem>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT c.id, c.full_name, c.phone, c.position, c.experience, c.status, \
                 c.next_follow_up_at, c.rehire_status, c.created_at, \
                 (SELECT i.total_score FROM interviews i WHERE i.candidate_id = c.id \
                     ORDER BY i.created_at DESC LIMIT 1) AS last_score, \
                 (SELECT i.decision FROM interviews i WHERE i.candidate_id = c.id \
                     ORDER BY i.created_at DESC LIMIT 1) AS last_decision, \
                 (SELECT COUNT(*) FROM interviews i WHERE i.candidate_id = c.id) AS interview_count, \
                 (SELECT COUNT(*) FROM incidents n WHERE n.candidate_id = c.id) AS incident_count \
             FROM candidates c WHERE 1 = 1",
        );

        if let Some(q) = filter.q.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = format!("%{}%", q.trim());
            qb.push(" AND (c.full_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR c.phone ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR c.position ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(status) = filter.status.as_deref() {
            qb.push(" AND c.status = ").push_bind(status.to_string());
        }
        if let Some(rehire) = filter.rehire_status.as_deref() {
            qb.push(" AND c.rehire_status = ").push_bind(rehire.to_string());
        }

        match filter.sort.as_deref() {
            Some("oldest") => qb.push(" ORDER BY c.created_at ASC"),
            Some("name") => qb.push(" ORDER BY c.full_name ASC"),
            Some("followUp") => qb.push(" ORDER BY c.next_follow_up_at ASC NULLS LAST"),
            _ => qb.push(" ORDER BY c.created_at DESC"),
        };
        qb.push(" LIMIT ").push_bind(LIST_LIMIT);

        let items = qb
            .build_query_as::<CandidateListItem>()
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Last-writer-wins partial update; only the provided fields are set.
    pub async fn update(&self, id: Uuid, changes: &CandidateChanges) -> Result<Candidate> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE candidates SET updated_at = NOW()");

        if let Some(status) = changes.status.as_deref() {
            qb.push(", status = ").push_bind(status.to_string());
        }
        if let Some(notes) = changes.notes.as_ref() {
            qb.push(", notes = ").push_bind(notes.clone());
        }
        if let Some(follow_up) = changes.next_follow_up_at.as_ref() {
            qb.push(", next_follow_up_at = ").push_bind(*follow_up);
        }
        if let Some(rehire) = changes.rehire_status.as_deref() {
            qb.push(", rehire_status = ").push_bind(rehire.to_string());
        }
        if let Some(reason) = changes.rehire_reason.as_ref() {
            qb.push(", rehire_reason = ").push_bind(reason.clone());
        }

        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING ").push(CANDIDATE_COLUMNS);

        let candidate = qb
            .build_query_as::<Candidate>()
            .fetch_one(&self.pool)
            .await?;
        Ok(candidate)
    }

    pub async fn has_high_severity_incidents(&self, id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM incidents WHERE candidate_id = $1 AND severity = 'HIGH')",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    pub async fn export_rows(&self, filter: &ExportFilter) -> Result<Vec<CandidateExportRow>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT c.id, c.full_name, c.phone, c.position, c.experience, c.status, \
                 c.rehire_status, c.notes, c.created_at, \
                 (SELECT i.total_score FROM interviews i WHERE i.candidate_id = c.id \
                     ORDER BY i.created_at DESC LIMIT 1) AS last_score, \
                 (SELECT i.decision FROM interviews i WHERE i.candidate_id = c.id \
                     ORDER BY i.created_at DESC LIMIT 1) AS last_decision \
             FROM candidates c WHERE 1 = 1",
        );

        if let Some(status) = filter.status.as_deref() {
            qb.push(" AND c.status = ").push_bind(status.to_string());
        }
        if let Some(rehire) = filter.rehire_status.as_deref() {
            qb.push(" AND c.rehire_status = ").push_bind(rehire.to_string());
        }
        if let Some(from) = filter.date_from {
            qb.push(" AND c.created_at >= ").push_bind(from);
        }
        if let Some(to) = filter.date_to {
            qb.push(" AND c.created_at <= ").push_bind(to);
        }
        qb.push(" ORDER BY c.created_at DESC");

        let rows = qb
            .build_query_as::<CandidateExportRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
