use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use rand::Rng;

use crate::activation::sigmoid_derivative;
use crate::error::{NetworkError, Result};
use crate::network::codec;
use crate::network::layer::Layer;

/// A fully-connected feedforward network trained by online backpropagation.
///
/// The conceptual input layer is implicit: inputs are supplied by the caller
/// and never materialized as units, so a topology of `[2, 3, 2]` yields two
/// layers (3 units reading 2 inputs, then 2 units reading 3).
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) layers: Box<[Layer]>,
    pub(crate) learning_rate: f64,
}

impl Network {
    /// Builds a network with the given per-layer sizes, drawing initial
    /// weights from the thread-local generator. Use [`Network::with_rng`]
    /// when reproducibility matters.
    pub fn new(topology: &[usize], learning_rate: f64) -> Result<Network> {
        Network::with_rng(topology, learning_rate, &mut rand::thread_rng())
    }

    /// Builds a network from an injected random source. Every weight and
    /// bias is drawn uniformly from [0, 1). Fails with `InvalidTopology` if
    /// `topology` has fewer than two entries or any entry is zero.
    pub fn with_rng<R: Rng>(topology: &[usize], learning_rate: f64, rng: &mut R) -> Result<Network> {
        if topology.len() < 2 {
            return Err(NetworkError::InvalidTopology {
                reason: format!(
                    "need at least an input size and one layer size, got {} entries",
                    topology.len()
                ),
            });
        }
        if let Some(position) = topology.iter().position(|&size| size == 0) {
            return Err(NetworkError::InvalidTopology {
                reason: format!("layer sizes must be positive, entry {position} is zero"),
            });
        }

        let layers = topology
            .windows(2)
            .map(|pair| Layer::random(pair[0], pair[1], rng))
            .collect();
        Ok(Network {
            layers,
            learning_rate,
        })
    }

    pub(crate) fn from_parts(layers: Box<[Layer]>, learning_rate: f64) -> Network {
        Network {
            layers,
            learning_rate,
        }
    }

    /// Number of external inputs the first layer consumes.
    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    /// Number of units in the last layer.
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size()
    }

    /// Per-layer sizes, input dimension first, in the shape accepted by
    /// [`Network::new`].
    pub fn topology(&self) -> Vec<usize> {
        std::iter::once(self.input_size())
            .chain(self.layers.iter().map(Layer::size))
            .collect()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Forward pass: each layer's outputs become the next layer's inputs;
    /// the last layer's outputs are returned. Every unit records its
    /// activation, which a subsequent [`Network::train`] call relies on.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        if inputs.len() != self.input_size() {
            return Err(NetworkError::InputSizeMismatch {
                expected: self.input_size(),
                actual: inputs.len(),
            });
        }

        let mut current = inputs.to_vec();
        for layer in self.layers.iter_mut() {
            current = layer.forward(&current);
        }
        Ok(current)
    }

    /// One online gradient step nudging the network's outputs for `inputs`
    /// toward `targets`. Dimension checks happen before any mutation, so a
    /// rejected call leaves the network untouched.
    pub fn train(&mut self, inputs: &[f64], targets: &[f64]) -> Result<()> {
        if targets.len() != self.output_size() {
            return Err(NetworkError::TargetSizeMismatch {
                expected: self.output_size(),
                actual: targets.len(),
            });
        }

        // Forward pass populates every unit's stored activation.
        self.predict(inputs)?;

        // Output layer: error = sigma'(output) * (target - output).
        let last = self.layers.len() - 1;
        for (unit, &target) in self.layers[last].units.iter_mut().zip(targets) {
            unit.error = sigmoid_derivative(unit.output) * (target - unit.output);
        }

        // Hidden layers, back to front. A unit's error is the next layer's
        // errors weighted by the connection each next-layer unit applies to
        // this unit's output, scaled by this unit's activation derivative.
        // All errors must be in place before any weight changes: layer i's
        // error depends on layer i+1's original weights.
        for i in (0..last).rev() {
            let (front, back) = self.layers.split_at_mut(i + 1);
            let next = &back[0];
            for (j, unit) in front[i].units.iter_mut().enumerate() {
                let downstream: f64 = next
                    .units
                    .iter()
                    .map(|next_unit| next_unit.error * next_unit.weights[j])
                    .sum();
                unit.error = sigmoid_derivative(unit.output) * downstream;
            }
        }

        // Updates in forward order. Each layer's input vector is the one it
        // saw during the forward pass; stored activations are untouched by
        // weight changes, so no layer sees partially-updated values.
        let mut layer_inputs = inputs.to_vec();
        for layer in self.layers.iter_mut() {
            let outputs = layer.outputs();
            for unit in layer.units.iter_mut() {
                let step = self.learning_rate * unit.error;
                unit.bias += step;
                for (weight, &input) in unit.weights.iter_mut().zip(&layer_inputs) {
                    *weight += step * input;
                }
            }
            layer_inputs = outputs;
        }
        Ok(())
    }

    /// Writes the learning rate, topology, weights and biases to `path` in
    /// the little-endian binary format described in [`codec`]. A failed
    /// write leaves a truncated file behind; the caller decides whether to
    /// retry.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("saving network {:?} to {}", self.topology(), path.display());
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        codec::encode(self, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Builds a network from a file previously written by [`Network::save`].
    /// The topology is taken entirely from the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Network> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let network = codec::decode(&mut reader)?;
        debug!(
            "loaded network {:?} from {}",
            network.topology(),
            path.display()
        );
        Ok(network)
    }

    /// Replaces this network's weights, biases and learning rate with the
    /// file's contents. The file is decoded in full and its topology
    /// compared against the current one before any state changes; on
    /// mismatch the call fails with `TopologyMismatch` and `self` is left
    /// exactly as it was.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let loaded = Network::from_file(path)?;
        if loaded.topology() != self.topology() {
            return Err(NetworkError::TopologyMismatch {
                detail: format!(
                    "file holds {:?}, network has {:?}",
                    loaded.topology(),
                    self.topology()
                ),
            });
        }
        *self = loaded;
        Ok(())
    }
}
