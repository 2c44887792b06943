use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised while building or driving a `Network`.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A layer width was negative.
    InvalidShape { index: usize, width: i64 },
    /// A weight matrix or bias vector has the wrong dimensions.
    /// `pair` counts consecutive layer pairs from 0; bias vectors are
    /// reported as `(1, len)`.
    ShapeMismatch {
        pair: usize,
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Wrong number of weight matrices or bias vectors.
    LayerCountMismatch { expected: usize, got: usize },
    /// Forward input length differs from the input layer width.
    InputMismatch { expected: usize, got: usize },
    /// Forward was called on a network with no declared layers.
    EmptyNetwork,
    /// No activation slot for declared layer `layer`. Declared layers count
    /// from 0 at the input, so valid indices are `1..layers`.
    LayerOutOfRange { layer: usize, layers: usize },
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidShape { index, width } => {
                write!(f, "invalid shape: layer {index} has negative width {width}")
            }
            NetworkError::ShapeMismatch {
                pair,
                expected,
                got,
            } => write!(
                f,
                "shape mismatch at layer pair {pair}: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            NetworkError::LayerCountMismatch { expected, got } => {
                write!(f, "expected {expected} layer tensors, got {got}")
            }
            NetworkError::InputMismatch { expected, got } => {
                write!(f, "input has {got} values but the input layer has {expected}")
            }
            NetworkError::EmptyNetwork => write!(f, "network has no layers"),
            NetworkError::LayerOutOfRange { layer, layers } => {
                write!(f, "layer {layer} is out of range 1..{layers}")
            }
        }
    }
}

impl Error for NetworkError {}
