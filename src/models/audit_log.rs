use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only trail of every state-changing operation. The core only
/// writes these rows; external tooling reads them. The serial id keeps
/// insertion order even when two writes share a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: i64,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub candidate_id: Option<Uuid>,
    pub metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}
