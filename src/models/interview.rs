use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const SOURCE_OPTIONS: &[&str] = &["LOCAL", "REFERIDO", "REDES", "OTRO"];

/// One scored evaluation event. Immutable once recorded: there is no
/// update or delete path anywhere in the crate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
}
