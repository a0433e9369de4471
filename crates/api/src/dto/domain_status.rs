use catchall_domain::{DomainCounter, DomainStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainStatusResponse {
    pub status: DomainStatus,
}

/// Full counter view, returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCounterResponse {
    pub domain: String,
    pub delivered: u64,
    pub bounced: u64,
    pub status: DomainStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl DomainCounterResponse {
    pub fn from_counter(counter: DomainCounter) -> Self {
        Self {
            domain: counter.domain.to_string(),
            delivered: counter.delivered,
            bounced: counter.bounced,
            status: counter.status,
            created_at: counter.created_at,
            updated_at: counter.updated_at,
        }
    }
}
