pub mod error;
pub mod math;
pub mod activation;
pub mod network;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::{relu, tanh, ActivationFunction};
pub use network::network::Network;
pub use network::shape::NetworkShape;
pub use network::config::{NetworkConfig, WeightInit};
