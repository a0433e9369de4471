//! Catch-all detection domain layer
pub mod config;
pub mod delivery_event;
pub mod domain_counter;
pub mod domain_name;
pub mod domain_status;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, StorageBackend};
pub use delivery_event::DeliveryEvent;
pub use domain_counter::DomainCounter;
pub use domain_name::normalize_domain;
pub use domain_status::{DomainStatus, CATCH_ALL_THRESHOLD};
pub use errors::DomainError;
