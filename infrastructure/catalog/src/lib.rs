pub mod error;
pub mod network;
pub mod seed;
pub mod simulation;
pub mod product {
    pub mod local_data_source;
    pub mod model;
    pub mod remote_data_source;
    pub mod repository;
}
