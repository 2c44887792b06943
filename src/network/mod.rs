pub mod config;
pub mod network;
pub mod shape;

pub use config::{NetworkConfig, WeightInit};
pub use network::Network;
pub use shape::NetworkShape;
