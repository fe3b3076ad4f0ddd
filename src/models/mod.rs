pub mod audit_log;
pub mod candidate;
pub mod incident;
pub mod interview;
