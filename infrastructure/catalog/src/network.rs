use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

/// Connectivity check consulted by the repository before touching the remote source.
#[async_trait]
pub trait NetworkInfo: Send + Sync {
    async fn is_connected(&self) -> bool;
}

/// Connectivity flag that can be flipped at runtime.
pub struct SimulatedNetworkInfo {
    online: AtomicBool,
}

impl SimulatedNetworkInfo {
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
        tracing::debug!(online, "Simulated connectivity changed");
    }
}

impl Default for SimulatedNetworkInfo {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl NetworkInfo for SimulatedNetworkInfo {
    async fn is_connected(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}
