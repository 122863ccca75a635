use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct ConnectivityDto {
    /// Whether the simulated remote catalog is reachable
    pub online: bool,
}
