use catchall_application::use_cases::{
    GetDomainStatusUseCase, RecordBouncedUseCase, RecordDeliveredUseCase,
};
use catchall_domain::config::StoreConfig;
use std::sync::Arc;
use std::time::Duration;

use super::Repositories;

pub struct UseCases {
    pub record_delivered: Arc<RecordDeliveredUseCase>,
    pub record_bounced: Arc<RecordBouncedUseCase>,
    pub get_domain_status: Arc<GetDomainStatusUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, store: &StoreConfig) -> Self {
        let timeout = Duration::from_millis(store.operation_timeout_ms);

        Self {
            record_delivered: Arc::new(RecordDeliveredUseCase::new(
                repos.domain_counters.clone(),
                timeout,
            )),
            record_bounced: Arc::new(RecordBouncedUseCase::new(
                repos.domain_counters.clone(),
                timeout,
            )),
            get_domain_status: Arc::new(GetDomainStatusUseCase::new(
                repos.domain_counters.clone(),
                timeout,
            )),
        }
    }
}
