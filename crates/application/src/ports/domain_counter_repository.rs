use async_trait::async_trait;
use catchall_domain::{DeliveryEvent, DomainCounter, DomainError};

/// Storage for per-domain counters.
///
/// `domain` is always already normalized by the caller.
#[async_trait]
pub trait DomainCounterRepository: Send + Sync {
    /// Read-only lookup; never creates a record.
    async fn find(&self, domain: &str) -> Result<Option<DomainCounter>, DomainError>;

    /// Finds or creates the counter for `domain`, applies `event` and persists
    /// the result as one atomic unit with respect to other `apply` calls for
    /// the same domain. Returns the persisted counter.
    async fn apply(
        &self,
        domain: &str,
        event: DeliveryEvent,
    ) -> Result<DomainCounter, DomainError>;
}
