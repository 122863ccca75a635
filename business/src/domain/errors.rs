/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The remote source failed. For reads, the cache could not stand in either.
    #[error("repository.server")]
    Server,
    /// No connectivity and the local cache is empty.
    #[error("repository.cache")]
    Cache,
    /// Writes need the remote source.
    #[error("repository.offline")]
    Offline,
    #[error("repository.persistence")]
    Persistence,
}

impl RepositoryError {
    /// True for failures caused by the simulated network rather than the data itself.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            RepositoryError::Server | RepositoryError::Cache | RepositoryError::Offline
        )
    }
}
