pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    audit_service::AuditService, candidate_service::CandidateService,
    incident_service::IncidentService, interview_service::InterviewService,
    session_service::SessionService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub candidate_service: CandidateService,
    pub interview_service: InterviewService,
    pub incident_service: IncidentService,
    pub audit_service: AuditService,
    pub session_service: SessionService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        let candidate_service = CandidateService::new(pool.clone());
        let interview_service = InterviewService::new(pool.clone());
        let incident_service = IncidentService::new(pool.clone());
        let audit_service = AuditService::new(pool.clone());
        let session_service = SessionService::new(config.admin_password.clone());

        Self {
            pool,
            candidate_service,
            interview_service,
            incident_service,
            audit_service,
            session_service,
        }
    }
}
