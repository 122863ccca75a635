use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use crate::error::DataSourceError;
use crate::network::NetworkInfo;

use super::local_data_source::ProductLocalDataSource;
use super::model::ProductModel;
use super::remote_data_source::ProductRemoteDataSource;

/// Product repository backed by a remote source with a local cache fallback.
///
/// Reads go to the remote source when connected and refresh the cache on
/// success. A remote `Server` failure (or no connectivity) falls back to the
/// cache. Writes always require the remote source and are mirrored into the
/// cache afterwards.
pub struct ProductRepositoryImpl {
    remote: Arc<dyn ProductRemoteDataSource>,
    local: Arc<dyn ProductLocalDataSource>,
    network: Arc<dyn NetworkInfo>,
    logger: Arc<dyn Logger>,
}

impl ProductRepositoryImpl {
    pub fn new(
        remote: Arc<dyn ProductRemoteDataSource>,
        local: Arc<dyn ProductLocalDataSource>,
        network: Arc<dyn NetworkInfo>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            remote,
            local,
            network,
            logger,
        }
    }

    /// Maps a cache lookup onto the error reported to callers.
    /// `on_miss` is what an empty cache means in the current situation.
    fn cache_error(e: DataSourceError, on_miss: RepositoryError) -> RepositoryError {
        match e {
            DataSourceError::NotFound => RepositoryError::NotFound,
            DataSourceError::CacheMiss => on_miss,
            DataSourceError::Serialization => RepositoryError::Persistence,
            DataSourceError::Server => RepositoryError::Server,
        }
    }

    fn remote_error(e: DataSourceError) -> RepositoryError {
        match e {
            DataSourceError::NotFound => RepositoryError::NotFound,
            DataSourceError::Serialization => RepositoryError::Persistence,
            DataSourceError::Server | DataSourceError::CacheMiss => RepositoryError::Server,
        }
    }

    async fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.network.is_connected().await {
            Ok(())
        } else {
            self.logger.warn("Write rejected: no connectivity");
            Err(RepositoryError::Offline)
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        if !self.network.is_connected().await {
            self.logger.debug("Offline, serving catalog from cache");
            let cached = self
                .local
                .cached_products()
                .await
                .map_err(|e| Self::cache_error(e, RepositoryError::Cache))?;
            return Ok(cached.into_iter().map(|m| m.into_domain()).collect());
        }

        match self.remote.fetch_all().await {
            Ok(models) => {
                if let Err(e) = self.local.cache_products(&models).await {
                    self.logger
                        .warn(&format!("Failed to refresh product cache: {}", e));
                }
                Ok(models.into_iter().map(|m| m.into_domain()).collect())
            }
            Err(DataSourceError::Server) => {
                self.logger
                    .warn("Remote catalog unavailable, falling back to cache");
                let cached = self
                    .local
                    .cached_products()
                    .await
                    .map_err(|e| Self::cache_error(e, RepositoryError::Server))?;
                Ok(cached.into_iter().map(|m| m.into_domain()).collect())
            }
            Err(e) => Err(Self::remote_error(e)),
        }
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        if !self.network.is_connected().await {
            self.logger
                .debug(&format!("Offline, serving product {} from cache", id));
            let cached = self
                .local
                .cached_product(id)
                .await
                .map_err(|e| Self::cache_error(e, RepositoryError::Cache))?;
            return Ok(cached.into_domain());
        }

        match self.remote.fetch_by_id(id).await {
            Ok(model) => {
                if let Err(e) = self.local.cache_product(&model).await {
                    self.logger
                        .warn(&format!("Failed to cache product {}: {}", id, e));
                }
                Ok(model.into_domain())
            }
            Err(DataSourceError::Server) => {
                self.logger.warn(&format!(
                    "Remote lookup of product {} failed, falling back to cache",
                    id
                ));
                let cached = self
                    .local
                    .cached_product(id)
                    .await
                    .map_err(|e| match e {
                        // The remote is authoritative; a cache without the id proves nothing.
                        DataSourceError::NotFound => RepositoryError::Server,
                        other => Self::cache_error(other, RepositoryError::Server),
                    })?;
                Ok(cached.into_domain())
            }
            Err(e) => Err(Self::remote_error(e)),
        }
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        self.ensure_online().await?;

        let stored = self
            .remote
            .upsert(ProductModel::from_domain(product))
            .await
            .map_err(Self::remote_error)?;

        if let Err(e) = self.local.cache_product(&stored).await {
            self.logger
                .warn(&format!("Failed to cache product {}: {}", stored.id, e));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.ensure_online().await?;

        self.remote.remove(id).await.map_err(Self::remote_error)?;

        if let Err(e) = self.local.evict_product(id).await {
            self.logger
                .warn(&format!("Failed to evict product {} from cache: {}", id, e));
        }
        Ok(())
    }
}
