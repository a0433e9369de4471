pub mod domains;
pub mod events;

pub use domains::GetDomainStatusUseCase;
pub use events::{RecordBouncedUseCase, RecordDeliveredUseCase};

use catchall_domain::DomainError;
use std::future::Future;
use std::time::Duration;

pub(crate) async fn bounded<T, F>(limit: Duration, operation: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    tokio::time::timeout(limit, operation)
        .await
        .map_err(|_| DomainError::StoreTimeout)?
}
