use std::sync::Arc;

use catalog::network::NetworkInfo;
use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// `healthy`, or `degraded` while the catalog is served from cache
    pub status: String,
    /// Whether the simulated remote catalog is reachable
    pub catalog_online: bool,
    pub timestamp: String,
    pub version: String,
}

/// Liveness check. Stays 200 while the catalog runs on its cache.
pub struct Api {
    network: Arc<dyn NetworkInfo>,
}

impl Api {
    pub fn new(network: Arc<dyn NetworkInfo>) -> Self {
        Self { network }
    }
}

#[OpenApi]
impl Api {
    /// Health check
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let catalog_online = self.network.is_connected().await;
        Json(HealthCheckResponse {
            status: if catalog_online { "healthy" } else { "degraded" }.to_string(),
            catalog_online,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
