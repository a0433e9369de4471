pub mod domain_counter_repository;
pub mod domain_locks;
pub mod memory_domain_counter_repository;

pub use domain_counter_repository::SqliteDomainCounterRepository;
pub use domain_locks::DomainLocks;
pub use memory_domain_counter_repository::InMemoryDomainCounterRepository;

pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
