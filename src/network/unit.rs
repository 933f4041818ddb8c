use rand::Rng;

use crate::activation::sigmoid;

/// One computational node: incoming weights, a bias, and the transient state
/// left behind by the most recent forward/backward pass.
///
/// The weight slice is boxed so its length is frozen at construction; the
/// layer it belongs to decides that length (the previous layer's unit count,
/// or the external input size for the first layer).
#[derive(Debug, Clone)]
pub struct Unit {
    pub(crate) weights: Box<[f64]>,
    pub(crate) bias: f64,
    /// Activation from the most recent forward pass. Scratch state.
    pub(crate) output: f64,
    /// Error signal from the most recent backward pass. Scratch state.
    pub(crate) error: f64,
}

impl Unit {
    /// Draws every weight and the bias uniformly from [0, 1).
    pub(crate) fn random<R: Rng>(input_size: usize, rng: &mut R) -> Unit {
        let weights = (0..input_size).map(|_| rng.gen::<f64>()).collect();
        Unit {
            weights,
            bias: rng.gen::<f64>(),
            output: 0.0,
            error: 0.0,
        }
    }

    pub(crate) fn from_parts(weights: Box<[f64]>, bias: f64) -> Unit {
        Unit {
            weights,
            bias,
            output: 0.0,
            error: 0.0,
        }
    }

    /// Weighted sum of `inputs` plus bias, squashed through the sigmoid.
    /// Records the activation for a later backward pass and returns it.
    pub(crate) fn activate(&mut self, inputs: &[f64]) -> f64 {
        let sum: f64 = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(weight, input)| weight * input)
            .sum();
        self.output = sigmoid(self.bias + sum);
        self.output
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Activation from the most recent `predict`/`train` call.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Error signal from the most recent `train` call.
    pub fn error(&self) -> f64 {
        self.error
    }
}
