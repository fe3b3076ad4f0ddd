use crate::models::candidate::Candidate;
use crate::models::incident::Incident;
use crate::models::interview::Interview;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidateRequest {
    pub full_name: String,
    pub phone: String,
    pub position: String,
    #[validate(range(
        min = 0,
        max = 50,
        message = "La experiencia debe estar entre 0 y 50 años."
    ))]
    pub experience: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCandidatesQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub rehire_status: Option<String>,
    pub sort: Option<String>,
}

/// PATCH body. Double-`Option` fields distinguish an absent key (keep the
/// stored value) from an explicit `null` (clear it).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateRequest {
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub next_follow_up_at: Option<Option<String>>,
    pub rehire_status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub rehire_reason: Option<Option<String>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCandidatesQuery {
    pub status: Option<String>,
    pub rehire_status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetailResponse {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub interviews: Vec<Interview>,
    pub incidents: Vec<Incident>,
    pub has_high_severity_incidents: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateResponse {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn request(experience: i32) -> CreateCandidateRequest {
        CreateCandidateRequest {
            full_name: "Ana Pérez".into(),
            phone: "3001234567".into(),
            position: "Mesera".into(),
            experience,
        }
    }

    #[test]
    fn experience_bounds_are_inclusive() {
        assert!(request(0).validate().is_ok());
        assert!(request(50).validate().is_ok());
        assert!(request(51).validate().is_err());
        assert!(request(-1).validate().is_err());
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let body: UpdateCandidateRequest = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        assert_eq!(body.notes, Some(None));
        assert!(body.rehire_reason.is_none());

        let body: UpdateCandidateRequest =
            serde_json::from_str(r#"{"notes": "llamar lunes"}"#).unwrap();
        assert_eq!(body.notes, Some(Some("llamar lunes".to_string())));
    }
}
