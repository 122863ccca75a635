use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::DataSourceError;

use super::model::ProductModel;

pub const CACHED_PRODUCTS_KEY: &str = "CACHED_PRODUCTS";

/// Last-known copy of the catalog, served when the remote source is unreachable.
///
/// `cache_product` and `evict_product` patch an existing catalog and are
/// no-ops until `cache_products` has stored one, so a single product never
/// poses as the whole catalog.
#[async_trait]
pub trait ProductLocalDataSource: Send + Sync {
    async fn cached_products(&self) -> Result<Vec<ProductModel>, DataSourceError>;
    async fn cached_product(&self, id: Uuid) -> Result<ProductModel, DataSourceError>;
    async fn cache_products(&self, products: &[ProductModel]) -> Result<(), DataSourceError>;
    async fn cache_product(&self, product: &ProductModel) -> Result<(), DataSourceError>;
    async fn evict_product(&self, id: Uuid) -> Result<(), DataSourceError>;
}

/// Key/value store holding the catalog as a single JSON document,
/// the way a mobile client keeps it in its preferences file.
#[derive(Default)]
pub struct InMemoryLocalDataSource {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryLocalDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode(raw: &str) -> Result<Vec<ProductModel>, DataSourceError> {
        serde_json::from_str(raw).map_err(|e| {
            tracing::error!(error = %e, "Cached catalog is corrupt");
            DataSourceError::Serialization
        })
    }

    fn encode(products: &[ProductModel]) -> Result<String, DataSourceError> {
        serde_json::to_string(products).map_err(|_| DataSourceError::Serialization)
    }

    async fn read_all(&self) -> Result<Vec<ProductModel>, DataSourceError> {
        let entries = self.entries.read().await;
        let raw = entries
            .get(CACHED_PRODUCTS_KEY)
            .ok_or(DataSourceError::CacheMiss)?;
        Self::decode(raw)
    }

    /// Applies `patch` to the cached catalog while holding the write guard
    /// for the whole read-modify-write. Does nothing when no catalog is cached.
    async fn patch_all<F>(&self, patch: F) -> Result<(), DataSourceError>
    where
        F: FnOnce(&mut Vec<ProductModel>) + Send,
    {
        let mut entries = self.entries.write().await;
        let Some(raw) = entries.get(CACHED_PRODUCTS_KEY) else {
            return Ok(());
        };
        let mut products = Self::decode(raw)?;
        patch(&mut products);
        entries.insert(CACHED_PRODUCTS_KEY.to_string(), Self::encode(&products)?);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) async fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl ProductLocalDataSource for InMemoryLocalDataSource {
    async fn cached_products(&self) -> Result<Vec<ProductModel>, DataSourceError> {
        self.read_all().await
    }

    async fn cached_product(&self, id: Uuid) -> Result<ProductModel, DataSourceError> {
        self.read_all()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(DataSourceError::NotFound)
    }

    async fn cache_products(&self, products: &[ProductModel]) -> Result<(), DataSourceError> {
        let raw = Self::encode(products)?;
        self.entries
            .write()
            .await
            .insert(CACHED_PRODUCTS_KEY.to_string(), raw);
        Ok(())
    }

    async fn cache_product(&self, product: &ProductModel) -> Result<(), DataSourceError> {
        self.patch_all(|products| match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        })
        .await
    }

    async fn evict_product(&self, id: Uuid) -> Result<(), DataSourceError> {
        self.patch_all(|products| products.retain(|p| p.id != id))
            .await
    }
}
