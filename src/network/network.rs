use log::{debug, trace, warn};
use crate::{
    activation::activation::ActivationFunction,
    error::{NetworkError, Result},
    math::matrix::Matrix,
    network::{config::{NetworkConfig, WeightInit}, shape::NetworkShape},
};

/// Value the bias unit holds while a forward pass runs.
pub const BIAS_UNIT: f64 = 1.0;

/// A feed-forward network whose buffers are derived from its shape.
///
/// `layers[0]` is the bias unit (length 1); `layers[k + 1]` holds the
/// activations of declared layer `k`. Weights and biases connect each pair of
/// consecutive declared layers. Every field is rebuilt from scratch whenever
/// the shape is set.
///
/// Mutation goes through `&mut self`; callers sharing a network across
/// threads must serialize access themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    shape: NetworkShape,
    layers: Vec<Vec<f64>>,
    weights: Vec<Matrix>,
    biases: Vec<Vec<f64>>,
    activations: Vec<ActivationFunction>,
    config: NetworkConfig,
}

impl Network {
    pub fn new(shape: impl Into<NetworkShape>) -> Network {
        Network::with_config(shape, NetworkConfig::default())
    }

    /// Fallible constructor for signed widths.
    pub fn from_widths(widths: &[i64]) -> Result<Network> {
        Ok(Network::new(NetworkShape::try_from_widths(widths)?))
    }

    pub fn with_config(shape: impl Into<NetworkShape>, config: NetworkConfig) -> Network {
        let mut network = Network {
            shape: shape.into(),
            layers: Vec::new(),
            weights: Vec::new(),
            biases: Vec::new(),
            activations: Vec::new(),
            config,
        };
        network.generate_network();
        network
    }

    /// Replaces the shape and rebuilds everything. Nothing carries over from
    /// the previous layout, even for layers whose width is unchanged.
    pub fn set_shape(&mut self, shape: impl Into<NetworkShape>) {
        self.shape = shape.into();
        self.generate_network();
    }

    /// Assigns one `(shape[k], shape[k + 1])` matrix per layer pair.
    /// The network is left untouched if any matrix is rejected.
    pub fn set_weights(&mut self, weights: Vec<Matrix>) -> Result<()> {
        self.check_count(weights.len())?;
        for (pair, (matrix, expected)) in weights.iter().zip(self.shape.layer_pairs()).enumerate() {
            if let Some(got) = weight_mismatch(matrix, expected) {
                warn!("rejecting weights for layer pair {pair}: expected {expected:?}, got {got:?}");
                return Err(NetworkError::ShapeMismatch { pair, expected, got });
            }
        }
        self.weights = weights;
        Ok(())
    }

    /// Assigns one bias vector of length `shape[k + 1]` per layer pair.
    pub fn set_biases(&mut self, biases: Vec<Vec<f64>>) -> Result<()> {
        self.check_count(biases.len())?;
        for (pair, (bias, (_, output))) in biases.iter().zip(self.shape.layer_pairs()).enumerate() {
            if bias.len() != output {
                warn!("rejecting biases for layer pair {pair}: expected {output}, got {}", bias.len());
                return Err(NetworkError::ShapeMismatch {
                    pair,
                    expected: (1, output),
                    got: (1, bias.len()),
                });
            }
        }
        self.biases = biases;
        Ok(())
    }

    /// Sets the activation of declared layer `layer`. The input layer (0)
    /// has none, so valid indices are `1..shape.len()`.
    pub fn set_activation(&mut self, layer: usize, activation: ActivationFunction) -> Result<()> {
        if layer == 0 || layer >= self.shape.len() {
            warn!("no activation slot for layer {layer}");
            return Err(NetworkError::LayerOutOfRange {
                layer,
                layers: self.shape.len(),
            });
        }
        self.activations[layer - 1] = activation;
        Ok(())
    }

    /// Refills weights with `init` and zeroes biases; layer buffers are kept.
    pub fn initialize_weights(&mut self, init: WeightInit) {
        debug!("initializing weights for shape {:?} with {init:?}", self.shape.widths());
        self.weights = self
            .shape
            .layer_pairs()
            .map(|(input, output)| init.matrix(input, output))
            .collect();
        self.biases = self.shape.layer_pairs().map(|(_, output)| vec![0.0; output]).collect();
    }

    /// Runs the input through every layer, storing each layer's activations
    /// in its buffer, and returns the output layer.
    pub fn forward(&mut self, input: &[f64]) -> Result<&[f64]> {
        let expected = *self.shape.widths().first().ok_or(NetworkError::EmptyNetwork)?;
        if input.len() != expected {
            return Err(NetworkError::InputMismatch {
                expected,
                got: input.len(),
            });
        }

        self.layers[0][0] = BIAS_UNIT;
        self.layers[1].copy_from_slice(input);

        for k in 0..self.weights.len() {
            let bias_unit = self.layers[0][0];
            let mut z = self.weights[k].left_mul(&self.layers[k + 1]);
            for (value, bias) in z.iter_mut().zip(self.biases[k].iter()) {
                *value += bias_unit * bias;
            }
            self.activations[k].apply(&mut z);
            trace!("layer {} -> {:?}", k + 1, z);
            self.layers[k + 2] = z;
        }

        Ok(self.layers[self.layers.len() - 1].as_slice())
    }

    pub fn shape(&self) -> &NetworkShape {
        &self.shape
    }

    /// All buffers, bias unit first.
    pub fn layers(&self) -> &[Vec<f64>] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&[f64]> {
        self.layers.get(index).map(Vec::as_slice)
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Vec<f64>] {
        &self.biases
    }

    /// One activation per computed layer, i.e. every declared layer but the input.
    pub fn activations(&self) -> &[ActivationFunction] {
        &self.activations
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Declared neurons plus the bias unit.
    pub fn neuron_count(&self) -> usize {
        self.shape.neuron_count() + 1
    }

    fn check_count(&self, got: usize) -> Result<()> {
        let expected = self.shape.len().saturating_sub(1);
        if got != expected {
            warn!("expected {expected} layer tensors, got {got}");
            return Err(NetworkError::LayerCountMismatch { expected, got });
        }
        Ok(())
    }

    /// Discards and reallocates every buffer for the current shape.
    fn generate_network(&mut self) {
        debug!("generating network for shape {:?}", self.shape.widths());

        self.layers = Vec::with_capacity(self.shape.len() + 1);
        self.layers.push(vec![0.0; 1]);
        for &width in self.shape.widths() {
            self.layers.push(vec![0.0; width]);
        }

        let computed = self.shape.len().saturating_sub(1);
        self.activations = (0..computed)
            .map(|k| {
                if k + 1 == computed {
                    self.config.output_activation
                } else {
                    self.config.hidden_activation
                }
            })
            .collect();

        self.initialize_weights(self.config.weight_init);
    }
}

/// Returns the offending dimensions when `matrix` is not exactly `expected`.
///
/// Both the declared `rows`/`cols` and the stored data must agree with
/// `expected`, since `forward` sizes its output from `cols`.
fn weight_mismatch(matrix: &Matrix, expected: (usize, usize)) -> Option<(usize, usize)> {
    if matrix.dims() != expected {
        return Some(matrix.dims());
    }
    if matrix.data.len() != matrix.rows {
        return Some((matrix.data.len(), matrix.cols));
    }
    matrix
        .ragged_row()
        .map(|row| (matrix.rows, matrix.data[row].len()))
}

impl Default for Network {
    fn default() -> Self {
        Network::new(NetworkShape::default())
    }
}
