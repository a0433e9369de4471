mod get_domain_status;

pub use get_domain_status::GetDomainStatusUseCase;
