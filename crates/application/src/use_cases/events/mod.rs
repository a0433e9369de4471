mod record_bounced;
mod record_delivered;

pub use record_bounced::RecordBouncedUseCase;
pub use record_delivered::RecordDeliveredUseCase;

use super::bounded;
use crate::ports::DomainCounterRepository;
use catchall_domain::{
    normalize_domain, DeliveryEvent, DomainCounter, DomainError, CATCH_ALL_THRESHOLD,
};
use std::time::Duration;
use tracing::{debug, error, info};

async fn record_event(
    repo: &dyn DomainCounterRepository,
    operation_timeout: Duration,
    domain: &str,
    event: DeliveryEvent,
) -> Result<DomainCounter, DomainError> {
    let domain = normalize_domain(domain).map_err(DomainError::InvalidDomainName)?;

    let counter = bounded(operation_timeout, repo.apply(&domain, event))
        .await
        .inspect_err(|e| {
            error!(domain = %domain, event = %event, error = %e, "Failed to record delivery event");
        })?;

    match event {
        DeliveryEvent::Delivered
            if counter.is_catch_all() && counter.delivered == CATCH_ALL_THRESHOLD =>
        {
            info!(
                domain = %counter.domain,
                delivered = counter.delivered,
                "Domain classified as catch-all"
            );
        }
        DeliveryEvent::Bounced if counter.bounced == 1 => {
            info!(
                domain = %counter.domain,
                delivered = counter.delivered,
                "Domain disqualified from catch-all by first bounce"
            );
        }
        _ => {
            debug!(
                domain = %counter.domain,
                event = %event,
                delivered = counter.delivered,
                bounced = counter.bounced,
                status = %counter.status,
                "Delivery event recorded"
            );
        }
    }

    Ok(counter)
}
