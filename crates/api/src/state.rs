use catchall_application::use_cases::{
    GetDomainStatusUseCase, RecordBouncedUseCase, RecordDeliveredUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub record_delivered: Arc<RecordDeliveredUseCase>,
    pub record_bounced: Arc<RecordBouncedUseCase>,
    pub get_domain_status: Arc<GetDomainStatusUseCase>,
}
