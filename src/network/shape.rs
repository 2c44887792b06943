use serde::{Serialize, Deserialize};
use crate::error::{NetworkError, Result};

/// Ordered layer widths, input layer first.
///
/// An empty shape is valid and describes a network holding only the bias
/// unit. Widths are unsigned; signed input goes through `try_from_widths`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkShape {
    widths: Vec<usize>,
}

impl NetworkShape {
    pub fn new(widths: Vec<usize>) -> NetworkShape {
        NetworkShape { widths }
    }

    /// Validates signed widths, rejecting the first negative entry.
    pub fn try_from_widths(widths: &[i64]) -> Result<NetworkShape> {
        let widths = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                usize::try_from(width).map_err(|_| NetworkError::InvalidShape { index, width })
            })
            .collect::<Result<Vec<usize>>>()?;
        Ok(NetworkShape { widths })
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Number of declared layers, not counting the bias unit.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// `(input-width, output-width)` for every consecutive layer pair.
    pub fn layer_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.widths.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn neuron_count(&self) -> usize {
        self.widths.iter().sum()
    }
}

impl From<Vec<usize>> for NetworkShape {
    fn from(widths: Vec<usize>) -> Self {
        NetworkShape::new(widths)
    }
}

impl From<&[usize]> for NetworkShape {
    fn from(widths: &[usize]) -> Self {
        NetworkShape::new(widths.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for NetworkShape {
    fn from(widths: [usize; N]) -> Self {
        NetworkShape::new(widths.to_vec())
    }
}
