use catchall_domain::{normalize_domain, DomainCounter, DomainError, DomainStatus};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::ports::DomainCounterRepository;
use crate::use_cases::bounded;

pub struct GetDomainStatusUseCase {
    repo: Arc<dyn DomainCounterRepository>,
    operation_timeout: Duration,
}

impl GetDomainStatusUseCase {
    pub fn new(repo: Arc<dyn DomainCounterRepository>, operation_timeout: Duration) -> Self {
        Self {
            repo,
            operation_timeout,
        }
    }

    /// Current classification, or `None` when no event was ever recorded.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<Option<DomainStatus>, DomainError> {
        Ok(self.get_counter(domain).await?.map(|c| c.status))
    }

    #[instrument(skip(self))]
    pub async fn get_counter(&self, domain: &str) -> Result<Option<DomainCounter>, DomainError> {
        let domain = normalize_domain(domain).map_err(DomainError::InvalidDomainName)?;

        let counter = bounded(self.operation_timeout, self.repo.find(&domain)).await?;
        debug!(domain = %domain, found = counter.is_some(), "Domain counter lookup");

        Ok(counter)
    }
}
