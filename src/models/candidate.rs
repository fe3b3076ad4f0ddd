use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle states a candidate can be in. Any state may be set to any
/// other by an explicit admin update; creating an interview always forces
/// `INTERVIEWED`.
pub const STATUS_OPTIONS: &[&str] = &[
    "NEW",
    "CONTACTED",
    "INTERVIEWED",
    "HIRED",
    "REJECTED",
    "ARCHIVED",
];

pub const REHIRE_OPTIONS: &[&str] = &["YES", "NO", "MAYBE"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub position: String,
    pub experience: i32,
    pub status: String,
    pub notes: Option<String>,
    pub next_follow_up_at: Option<DateTime<Utc>>,
    pub rehire_status: String,
    pub rehire_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List-view row: the candidate plus its latest interview outcome and
/// history counts, resolved by subqueries in the list query.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListItem {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub position: String,
    pub experience: i32,
    pub status: String,
    pub next_follow_up_at: Option<DateTime<Utc>>,
    pub rehire_status: String,
    pub created_at: DateTime<Utc>,
    pub last_score: Option<i32>,
    pub last_decision: Option<String>,
    pub interview_count: i64,
    pub incident_count: i64,
}

/// Export row: list-view data plus the free-text notes for the CSV.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateExportRow {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub position: String,
    pub experience: i32,
    pub status: String,
    pub rehire_status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_score: Option<i32>,
    pub last_decision: Option<String>,
}
