use catchall_domain::{DeliveryEvent, DomainCounter, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use super::record_event;
use crate::ports::DomainCounterRepository;

pub struct RecordDeliveredUseCase {
    repo: Arc<dyn DomainCounterRepository>,
    operation_timeout: Duration,
}

impl RecordDeliveredUseCase {
    pub fn new(repo: Arc<dyn DomainCounterRepository>, operation_timeout: Duration) -> Self {
        Self {
            repo,
            operation_timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<DomainCounter, DomainError> {
        record_event(
            self.repo.as_ref(),
            self.operation_timeout,
            domain,
            DeliveryEvent::Delivered,
        )
        .await
    }
}
