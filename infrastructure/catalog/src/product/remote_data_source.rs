use async_trait::async_trait;
use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::DataSourceError;
use crate::simulation::SimulationConfig;

use super::model::ProductModel;

/// The authoritative product source, normally behind a network.
#[async_trait]
pub trait ProductRemoteDataSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ProductModel>, DataSourceError>;
    async fn fetch_by_id(&self, id: Uuid) -> Result<ProductModel, DataSourceError>;
    async fn upsert(&self, product: ProductModel) -> Result<ProductModel, DataSourceError>;
    async fn remove(&self, id: Uuid) -> Result<(), DataSourceError>;
}

/// In-process stand-in for a product API.
///
/// Every call waits for the configured latency and then fails with
/// [`DataSourceError::Server`] with probability `failure_rate`.
pub struct SimulatedRemoteDataSource {
    products: RwLock<Vec<ProductModel>>,
    config: SimulationConfig,
}

impl SimulatedRemoteDataSource {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_products(config, Vec::new())
    }

    pub fn with_products(config: SimulationConfig, products: Vec<ProductModel>) -> Self {
        Self {
            products: RwLock::new(products),
            config,
        }
    }

    async fn simulate_round_trip(&self, operation: &str) -> Result<(), DataSourceError> {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let failed = rand::rng().random_bool(self.config.failure_rate);
        if failed {
            tracing::warn!(operation, "Simulated remote failure");
            return Err(DataSourceError::Server);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRemoteDataSource for SimulatedRemoteDataSource {
    async fn fetch_all(&self) -> Result<Vec<ProductModel>, DataSourceError> {
        self.simulate_round_trip("fetch_all").await?;
        Ok(self.products.read().await.clone())
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<ProductModel, DataSourceError> {
        self.simulate_round_trip("fetch_by_id").await?;
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DataSourceError::NotFound)
    }

    async fn upsert(&self, product: ProductModel) -> Result<ProductModel, DataSourceError> {
        self.simulate_round_trip("upsert").await?;
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(product)
    }

    async fn remove(&self, id: Uuid) -> Result<(), DataSourceError> {
        self.simulate_round_trip("remove").await?;
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(DataSourceError::NotFound);
        }
        Ok(())
    }
}
