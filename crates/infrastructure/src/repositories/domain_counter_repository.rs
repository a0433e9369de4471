use async_trait::async_trait;
use catchall_application::ports::DomainCounterRepository;
use catchall_domain::{DeliveryEvent, DomainCounter, DomainError, DomainStatus};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use super::{now_timestamp, DomainLocks};

const DEFAULT_MAX_UPDATE_ATTEMPTS: u32 = 32;

type DomainCounterRow = (String, i64, i64, String, i64, String, String);

/// SQLite-backed counters with optimistic concurrency.
///
/// Every write is conditional on the version that was read, so two writers
/// racing on the same domain cannot both succeed; the loser re-reads and
/// retries. Writers inside this process are additionally queued per domain,
/// which leaves the retry loop for writers in other processes sharing the
/// database file.
pub struct SqliteDomainCounterRepository {
    pool: SqlitePool,
    locks: DomainLocks,
    max_update_attempts: u32,
}

impl SqliteDomainCounterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            locks: DomainLocks::new(),
            max_update_attempts: DEFAULT_MAX_UPDATE_ATTEMPTS,
        }
    }

    pub fn with_max_update_attempts(mut self, attempts: u32) -> Self {
        self.max_update_attempts = attempts.max(1);
        self
    }

    fn row_to_counter(row: DomainCounterRow) -> DomainCounter {
        let (domain, delivered, bounced, status, version, created_at, updated_at) = row;
        let delivered = delivered.max(0) as u64;
        let bounced = bounced.max(0) as u64;

        let derived = DomainStatus::classify(delivered, bounced);
        match status.parse::<DomainStatus>() {
            Ok(stored) if stored == derived => {}
            _ => warn!(
                domain = %domain,
                stored = %status,
                derived = %derived,
                "Stored status disagrees with counts, using derived status"
            ),
        }

        DomainCounter {
            domain: Arc::from(domain.as_str()),
            delivered,
            bounced,
            status: derived,
            version,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }

    async fn insert_new(&self, next: &DomainCounter) -> Result<Option<DomainCounter>, DomainError> {
        let now = now_timestamp();

        let row = sqlx::query_as::<_, DomainCounterRow>(
            "INSERT INTO domain_counters (domain, delivered, bounced, status, version, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(domain) DO NOTHING
             RETURNING domain, delivered, bounced, status, version, created_at, updated_at",
        )
        .bind(next.domain.as_ref())
        .bind(next.delivered as i64)
        .bind(next.bounced as i64)
        .bind(next.status.as_str())
        .bind(next.version)
        .bind(&now)
        .bind(&now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert domain counter");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_counter))
    }

    async fn update_if_unchanged(
        &self,
        next: &DomainCounter,
        expected_version: i64,
    ) -> Result<Option<DomainCounter>, DomainError> {
        let now = now_timestamp();

        let row = sqlx::query_as::<_, DomainCounterRow>(
            "UPDATE domain_counters
             SET delivered = ?, bounced = ?, status = ?, version = ?, updated_at = ?
             WHERE domain = ? AND version = ?
             RETURNING domain, delivered, bounced, status, version, created_at, updated_at",
        )
        .bind(next.delivered as i64)
        .bind(next.bounced as i64)
        .bind(next.status.as_str())
        .bind(next.version)
        .bind(&now)
        .bind(next.domain.as_ref())
        .bind(expected_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update domain counter");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_counter))
    }
}

#[async_trait]
impl DomainCounterRepository for SqliteDomainCounterRepository {
    #[instrument(skip(self))]
    async fn find(&self, domain: &str) -> Result<Option<DomainCounter>, DomainError> {
        let row = sqlx::query_as::<_, DomainCounterRow>(
            "SELECT domain, delivered, bounced, status, version, created_at, updated_at
             FROM domain_counters WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query domain counter");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_counter))
    }

    #[instrument(skip(self))]
    async fn apply(
        &self,
        domain: &str,
        event: DeliveryEvent,
    ) -> Result<DomainCounter, DomainError> {
        let _guard = self.locks.lock(domain).await;

        for attempt in 1..=self.max_update_attempts {
            let written = match self.find(domain).await? {
                Some(current) => {
                    let next = current.apply(event);
                    self.update_if_unchanged(&next, current.version).await?
                }
                None => {
                    let next = DomainCounter::new(Arc::from(domain)).apply(event);
                    self.insert_new(&next).await?
                }
            };

            if let Some(counter) = written {
                return Ok(counter);
            }

            debug!(attempt, "Domain counter changed concurrently, retrying");
            tokio::task::yield_now().await;
        }

        warn!(
            attempts = self.max_update_attempts,
            "Gave up updating domain counter after repeated conflicts"
        );
        Err(DomainError::ConcurrentUpdateConflict(format!(
            "Domain counter '{}' was modified concurrently {} times",
            domain, self.max_update_attempts
        )))
    }
}
