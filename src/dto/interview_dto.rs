use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    pub candidate_id: Uuid,
    pub punctuality: i32,
    pub attitude: i32,
    pub teamwork: i32,
    pub decision: Option<String>,
    pub availability: Option<String>,
    pub expected_salary: Option<String>,
    pub can_start_date: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInterviewsQuery {
    pub candidate_id: Option<Uuid>,
}
