use crate::delivery_event::DeliveryEvent;
use crate::domain_status::DomainStatus;
use std::sync::Arc;

/// Per-domain aggregate of delivery outcomes.
///
/// `status` is always derived from the counts; the only way to change a
/// counter is [`DomainCounter::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCounter {
    pub domain: Arc<str>,
    pub delivered: u64,
    pub bounced: u64,
    pub status: DomainStatus,
    /// Bumped on every persisted mutation, used for conditional updates.
    pub version: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl DomainCounter {
    pub fn new(domain: Arc<str>) -> Self {
        Self {
            domain,
            delivered: 0,
            bounced: 0,
            status: DomainStatus::Unknown,
            version: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns the counter as it looks after one more `event`.
    pub fn apply(&self, event: DeliveryEvent) -> Self {
        let mut next = self.clone();
        match event {
            DeliveryEvent::Delivered => next.delivered = next.delivered.saturating_add(1),
            DeliveryEvent::Bounced => next.bounced = next.bounced.saturating_add(1),
        }
        next.status = DomainStatus::classify(next.delivered, next.bounced);
        next.version += 1;
        next
    }

    pub fn is_catch_all(&self) -> bool {
        self.status == DomainStatus::CatchAll
    }
}
