pub mod audit_service;
pub mod candidate_service;
pub mod decision_service;
pub mod export_service;
pub mod incident_service;
pub mod interview_service;
pub mod session_service;
