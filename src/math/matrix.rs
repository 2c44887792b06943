use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

/// Row-major weight matrix. A matrix between two layers has one row per
/// input neuron and one column per output neuron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Uniform samples on [-1, 1).
    pub fn uniform(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols);

        for row in res.data.iter_mut() {
            for x in row.iter_mut() {
                *x = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal(rng: &mut ThreadRng) -> f64 {
        // (0, 1] keeps ln() finite.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    fn normal(rows: usize, cols: usize, std_dev: f64) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols);
        for row in res.data.iter_mut() {
            for x in row.iter_mut() {
                *x = Matrix::sample_standard_normal(&mut rng) * std_dev;
            }
        }
        res
    }

    /// He initialization: samples from N(0, sqrt(2 / rows)).
    ///
    /// Suited to ReLU layers. `rows` is the fan-in; a zero fan-in yields an
    /// empty matrix with nothing to sample.
    pub fn he(rows: usize, cols: usize) -> Matrix {
        if rows == 0 {
            return Matrix::zeros(rows, cols);
        }
        Matrix::normal(rows, cols, (2.0 / rows as f64).sqrt())
    }

    /// Xavier (Glorot) initialization: samples from N(0, sqrt(1 / rows)).
    ///
    /// Suited to Tanh layers. `rows` is the fan-in.
    pub fn xavier(rows: usize, cols: usize) -> Matrix {
        if rows == 0 {
            return Matrix::zeros(rows, cols);
        }
        Matrix::normal(rows, cols, (1.0 / rows as f64).sqrt())
    }

    /// Builds a matrix from rows. `cols` is taken from the first row, so an
    /// empty `data` gives a 0x0 matrix; use `zeros(0, n)` for 0xn.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data,
        }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the first row whose length differs from `cols`, if any.
    pub fn ragged_row(&self) -> Option<usize> {
        self.data.iter().position(|row| row.len() != self.cols)
    }

    /// Row vector times matrix: `out[j] = sum_i input[i] * self[i][j]`.
    ///
    /// The caller guarantees `input.len() == rows`.
    pub fn left_mul(&self, input: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.cols];
        for (x, row) in input.iter().zip(self.data.iter()) {
            for (o, w) in out.iter_mut().zip(row.iter()) {
                *o += x * w;
            }
        }
        out
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
