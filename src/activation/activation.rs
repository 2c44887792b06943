use serde::{Serialize, Deserialize};

/// Standard rectifier: identity for positive input, zero otherwise.
pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    ReLU,
    Tanh,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => relu(x),
            ActivationFunction::Tanh => tanh(x),
        }
    }

    /// Applies the activation to every value of a layer buffer in place.
    pub fn apply(&self, buffer: &mut [f64]) {
        for x in buffer.iter_mut() {
            *x = self.function(*x);
        }
    }
}
