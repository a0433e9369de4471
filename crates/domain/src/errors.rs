use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Store operation timed out")]
    StoreTimeout,

    #[error("Concurrent update conflict: {0}")]
    ConcurrentUpdateConflict(String),
}

impl DomainError {
    /// Infrastructure failures the caller may retry later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DomainError::DatabaseError(_)
                | DomainError::StoreTimeout
                | DomainError::ConcurrentUpdateConflict(_)
        )
    }
}
