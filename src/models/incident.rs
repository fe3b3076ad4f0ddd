use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const TYPE_OPTIONS: &[&str] = &[
    "NO_SHOW",
    "CONFLICT",
    "DISHONESTY",
    "THEFT_SUSPECT",
    "POOR_PERFORMANCE",
    "CUSTOMER_COMPLAINT",
    "POSITIVE_FEEDBACK",
    "OTHER",
];

pub const SEVERITY_OPTIONS: &[&str] = &["LOW", "MEDIUM", "HIGH"];

/// Factual record of behavior tied to a candidate, good or bad.
/// Append-only by design.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: Uuid,
    pub candidate_id: Uuid,
    #[serde(rename = "type")]
    pub incident_type: String,
    pub severity: String,
    pub summary: String,
    pub details: Option<String>,
    pub evidence_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
