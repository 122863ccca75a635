use std::sync::Arc;

use catalog::network::{NetworkInfo, SimulatedNetworkInfo};
use poem_openapi::{OpenApi, payload::Json};

use crate::api::simulation::dto::ConnectivityDto;
use crate::api::tags::ApiTags;

/// Toggles the simulated connectivity so the cache fallback can be exercised by hand.
pub struct SimulationApi {
    network: Arc<SimulatedNetworkInfo>,
}

impl SimulationApi {
    pub fn new(network: Arc<SimulatedNetworkInfo>) -> Self {
        Self { network }
    }
}

#[OpenApi]
impl SimulationApi {
    /// Current connectivity
    #[oai(
        path = "/simulation/connectivity",
        method = "get",
        tag = "ApiTags::Simulation"
    )]
    async fn get_connectivity(&self) -> Json<ConnectivityDto> {
        Json(ConnectivityDto {
            online: self.network.is_connected().await,
        })
    }

    /// Set connectivity
    ///
    /// While offline, reads are served from the local cache and writes are rejected.
    #[oai(
        path = "/simulation/connectivity",
        method = "put",
        tag = "ApiTags::Simulation"
    )]
    async fn set_connectivity(&self, body: Json<ConnectivityDto>) -> Json<ConnectivityDto> {
        self.network.set_online(body.0.online);
        tracing::info!(online = body.0.online, "Connectivity updated via API");
        Json(ConnectivityDto {
            online: body.0.online,
        })
    }
}
