use crate::error::Result;
use crate::models::audit_log::AuditLog;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AuditService {
    pool: PgPool,
}

impl AuditService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn log(
        &self,
        action: &str,
        entity_type: &str,
        entity_id: Uuid,
        candidate_id: Option<Uuid>,
        metadata: Option<JsonValue>,
    ) -> Result<AuditLog> {
        let entry = sqlx::query_as::<_, AuditLog>(
            "INSERT INTO audit_logs (action, entity_type, entity_id, candidate_id, metadata) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, action, entity_type, entity_id, candidate_id, metadata, created_at",
        )
        .bind(action)
        .bind(entity_type)
        .bind(entity_id)
        .bind(candidate_id)
        .bind(metadata)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    /// Audit failure must never abort the caller's primary mutation; it is
    /// recorded as a degraded write instead.
    pub async fn log_best_effort(
        &self,
        action: &str,
        entity_type: &str,
        entity_id: Uuid,
        candidate_id: Option<Uuid>,
        metadata: Option<JsonValue>,
    ) {
        if let Err(err) = self
            .log(action, entity_type, entity_id, candidate_id, metadata)
            .await
        {
            tracing::warn!(
                error = ?err,
                action,
                entity_type,
                %entity_id,
                "audit write failed, primary mutation kept"
            );
        }
    }
}
