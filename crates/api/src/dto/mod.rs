pub mod domain_status;
pub mod health;

pub use domain_status::{DomainCounterResponse, DomainStatusResponse};
pub use health::HealthResponse;
