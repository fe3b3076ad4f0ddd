use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncidentRequest {
    pub candidate_id: Uuid,
    #[serde(rename = "type")]
    pub incident_type: Option<String>,
    pub severity: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub evidence_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIncidentsQuery {
    pub candidate_id: Option<Uuid>,
}
