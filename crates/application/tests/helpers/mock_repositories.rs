#![allow(dead_code)]

use async_trait::async_trait;
use catchall_application::ports::DomainCounterRepository;
use catchall_domain::{DeliveryEvent, DomainCounter, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockDomainCounterRepository {
    counters: Arc<RwLock<HashMap<String, DomainCounter>>>,
    should_fail: Arc<RwLock<bool>>,
    delay: Arc<RwLock<Option<Duration>>>,
    find_calls: Arc<AtomicUsize>,
    apply_calls: Arc<AtomicUsize>,
}

impl MockDomainCounterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_counter(domain: &str, delivered: u64, bounced: u64) -> Self {
        let repo = Self::new();
        let mut counter = DomainCounter::new(Arc::from(domain));
        for _ in 0..delivered {
            counter = counter.apply(DeliveryEvent::Delivered);
        }
        for _ in 0..bounced {
            counter = counter.apply(DeliveryEvent::Bounced);
        }
        repo.counters
            .write()
            .await
            .insert(domain.to_string(), counter);
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn get(&self, domain: &str) -> Option<DomainCounter> {
        self.counters.read().await.get(domain).cloned()
    }

    pub async fn count(&self) -> usize {
        self.counters.read().await.len()
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn apply_calls(&self) -> usize {
        self.apply_calls.load(Ordering::SeqCst)
    }

    async fn simulate(&self) -> Result<(), DomainError> {
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DomainCounterRepository for MockDomainCounterRepository {
    async fn find(&self, domain: &str) -> Result<Option<DomainCounter>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate().await?;
        Ok(self.counters.read().await.get(domain).cloned())
    }

    async fn apply(
        &self,
        domain: &str,
        event: DeliveryEvent,
    ) -> Result<DomainCounter, DomainError> {
        self.apply_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate().await?;

        let mut counters = self.counters.write().await;
        let current = counters
            .get(domain)
            .cloned()
            .unwrap_or_else(|| DomainCounter::new(Arc::from(domain)));
        let next = current.apply(event);
        counters.insert(domain.to_string(), next.clone());
        Ok(next)
    }
}
