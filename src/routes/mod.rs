pub mod auth;
pub mod candidate_routes;
pub mod export;
pub mod health;
pub mod incident_routes;
pub mod interview_routes;
