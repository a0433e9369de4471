mod domain_counter_repository;

pub use domain_counter_repository::DomainCounterRepository;
