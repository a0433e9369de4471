use catchall_application::ports::DomainCounterRepository;
use catchall_domain::{Config, StorageBackend};
use catchall_infrastructure::repositories::{
    InMemoryDomainCounterRepository, SqliteDomainCounterRepository,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::bootstrap;

pub struct Repositories {
    pub domain_counters: Arc<dyn DomainCounterRepository>,
}

impl Repositories {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let domain_counters: Arc<dyn DomainCounterRepository> = match config.database.backend {
            StorageBackend::Sqlite => {
                let pool = bootstrap::init_database(&config.database).await?;
                Arc::new(
                    SqliteDomainCounterRepository::new(pool)
                        .with_max_update_attempts(config.store.max_update_attempts),
                )
            }
            StorageBackend::Memory => {
                warn!("Using in-memory storage, counters are lost on restart");
                Arc::new(InMemoryDomainCounterRepository::new())
            }
        };

        info!(backend = %config.database.backend, "Domain counter store ready");

        Ok(Self { domain_counters })
    }
}
