use crate::error::Result;
use crate::models::interview::Interview;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug)]
pub struct NewInterview {
    pub candidate_id: Uuid,
    pub punctuality: i32,
    pub attitude: i32,
    pub teamwork: i32,
    pub total_score: i32,
    pub decision: String,
    pub availability: Option<String>,
    pub expected_salary: Option<String>,
    pub can_start_date: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends the interview and forces the candidate to INTERVIEWED.
    /// The status write is a post-condition of interview creation and
    /// overrides whatever status was set before it.
    pub async fn create(&self, data: NewInterview) -> Result<Interview> {
        let interview = sqlx::query_as::<_, Interview>(
            "INSERT INTO interviews \
                 (candidate_id, punctuality, attitude, teamwork, total_score, decision, \
                  availability, expected_salary, can_start_date, source) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING id, candidate_id, punctuality, attitude, teamwork, total_score, \
                 decision, availability, expected_salary, can_start_date, source, created_at",
        )
        .bind(data.candidate_id)
        .bind(data.punctuality)
        .bind(data.attitude)
        .bind(data.teamwork)
        .bind(data.total_score)
        .bind(&data.decision)
        .bind(&data.availability)
        .bind(&data.expected_salary)
        .bind(data.can_start_date)
        .bind(&data.source)
        .fetch_one(&self.pool)
        .await?;

        sqlx::query(
            "UPDATE candidates SET status = 'INTERVIEWED', updated_at = NOW() WHERE id = $1",
        )
        .bind(data.candidate_id)
        .execute(&self.pool)
        .await?;

        Ok(interview)
    }

    pub async fn list_for_candidate(&self, candidate_id: Uuid) -> Result<Vec<Interview>> {
        let interviews = sqlx::query_as::<_, Interview>(
            "SELECT id, candidate_id, punctuality, attitude, teamwork, total_score, \
                 decision, availability, expected_salary, can_start_date, source, created_at \
             FROM interviews WHERE candidate_id = $1 ORDER BY created_at DESC",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(interviews)
    }
}
