use rand::Rng;

use crate::network::unit::Unit;

/// An ordered run of units sharing the same input dimensionality. Unit order
/// matters: the next layer's weight index j refers to this layer's unit j.
#[derive(Debug, Clone)]
pub struct Layer {
    pub(crate) units: Box<[Unit]>,
}

impl Layer {
    pub(crate) fn random<R: Rng>(input_size: usize, size: usize, rng: &mut R) -> Layer {
        let units = (0..size).map(|_| Unit::random(input_size, rng)).collect();
        Layer { units }
    }

    pub(crate) fn from_units(units: Box<[Unit]>) -> Layer {
        Layer { units }
    }

    /// Feeds `inputs` through every unit and returns the layer's output
    /// vector, which becomes the next layer's input.
    pub(crate) fn forward(&mut self, inputs: &[f64]) -> Vec<f64> {
        self.units
            .iter_mut()
            .map(|unit| unit.activate(inputs))
            .collect()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn size(&self) -> usize {
        self.units.len()
    }

    /// Number of inputs each unit in this layer consumes.
    pub fn input_size(&self) -> usize {
        self.units[0].weights.len()
    }

    /// Activations recorded by the most recent forward pass.
    pub fn outputs(&self) -> Vec<f64> {
        self.units.iter().map(|unit| unit.output).collect()
    }
}
