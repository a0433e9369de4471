use async_trait::async_trait;
use catchall_application::ports::DomainCounterRepository;
use catchall_domain::{DeliveryEvent, DomainCounter, DomainError};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::instrument;

use super::now_timestamp;

/// Process-local counters.
///
/// `apply` runs entirely under the shard write lock of the domain's entry,
/// so updates to one domain are serialized while other shards stay free.
#[derive(Default)]
pub struct InMemoryDomainCounterRepository {
    counters: DashMap<Arc<str>, DomainCounter>,
}

impl InMemoryDomainCounterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[async_trait]
impl DomainCounterRepository for InMemoryDomainCounterRepository {
    #[instrument(skip(self))]
    async fn find(&self, domain: &str) -> Result<Option<DomainCounter>, DomainError> {
        Ok(self.counters.get(domain).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn apply(
        &self,
        domain: &str,
        event: DeliveryEvent,
    ) -> Result<DomainCounter, DomainError> {
        let now = now_timestamp();

        let mut entry = self
            .counters
            .entry(Arc::from(domain))
            .or_insert_with(|| DomainCounter::new(Arc::from(domain)));

        let mut next = entry.value().apply(event);
        if next.created_at.is_none() {
            next.created_at = Some(now.clone());
        }
        next.updated_at = Some(now);
        *entry.value_mut() = next.clone();

        Ok(next)
    }
}
