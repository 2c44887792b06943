use serde::{Deserialize, Serialize};
use crate::activation::activation::ActivationFunction;
use crate::math::matrix::Matrix;

/// How weight matrices are filled when a network is (re)built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightInit {
    #[default]
    Zeros,
    /// Uniform on [-1, 1).
    Uniform,
    /// N(0, sqrt(1 / fan_in)); pairs with Tanh.
    Xavier,
    /// N(0, sqrt(2 / fan_in)); pairs with ReLU.
    He,
}

impl WeightInit {
    /// Builds an `(input, output)` weight matrix.
    pub fn matrix(&self, input: usize, output: usize) -> Matrix {
        match self {
            WeightInit::Zeros => Matrix::zeros(input, output),
            WeightInit::Uniform => Matrix::uniform(input, output),
            WeightInit::Xavier => Matrix::xavier(input, output),
            WeightInit::He => Matrix::he(input, output),
        }
    }
}

/// Construction-time settings for a `Network`.
///
/// # Fields
/// - `hidden_activation` — applied by every computed layer except the last
/// - `output_activation` — applied by the last layer
/// - `weight_init`       — fills weights on every shape rebuild
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub hidden_activation: ActivationFunction,
    pub output_activation: ActivationFunction,
    pub weight_init: WeightInit,
}

impl NetworkConfig {
    pub fn new(
        hidden_activation: ActivationFunction,
        output_activation: ActivationFunction,
        weight_init: WeightInit,
    ) -> Self {
        NetworkConfig {
            hidden_activation,
            output_activation,
            weight_init,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::new(
            ActivationFunction::ReLU,
            ActivationFunction::Tanh,
            WeightInit::Zeros,
        )
    }
}
