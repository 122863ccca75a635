use thiserror::Error;

/// Failures raised by the remote and local data sources.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataSourceError {
    #[error("datasource.server")]
    Server,
    #[error("datasource.not_found")]
    NotFound,
    #[error("datasource.cache_miss")]
    CacheMiss,
    #[error("datasource.serialization")]
    Serialization,
}
