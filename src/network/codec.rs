//! Little-endian binary wire format for trained networks.
//!
//! Stream layout, with 4-byte signed counts and 8-byte IEEE-754 floats, no
//! padding:
//!
//! ```text
//! learning_rate: f64
//! layer_count:   i32
//! per layer:
//!   unit_count:  i32
//!   per unit:
//!     weight_count: i32
//!     weights:      weight_count x f64
//!     bias:         f64
//! ```
//!
//! Byte order and field widths are pinned so files written on one platform
//! load on any other.

use std::io::{self, Read, Write};

use crate::error::Result;
use crate::network::layer::Layer;
use crate::network::network::Network;
use crate::network::unit::Unit;

pub(crate) fn encode<W: Write>(network: &Network, writer: &mut W) -> Result<()> {
    write_f64(writer, network.learning_rate)?;
    write_count(writer, network.layers.len())?;
    for layer in network.layers.iter() {
        write_count(writer, layer.units.len())?;
        for unit in layer.units.iter() {
            write_count(writer, unit.weights.len())?;
            for &weight in unit.weights.iter() {
                write_f64(writer, weight)?;
            }
            write_f64(writer, unit.bias)?;
        }
    }
    Ok(())
}

pub(crate) fn decode<R: Read>(reader: &mut R) -> Result<Network> {
    let learning_rate = read_f64(reader)?;
    let layer_count = read_count(reader, "layer count")?;
    let mut layers = Vec::with_capacity(layer_count);
    for _ in 0..layer_count {
        let unit_count = read_count(reader, "unit count")?;
        let mut units = Vec::with_capacity(unit_count);
        for _ in 0..unit_count {
            let weight_count = read_count(reader, "weight count")?;
            let mut weights = vec![0.0; weight_count];
            for weight in weights.iter_mut() {
                *weight = read_f64(reader)?;
            }
            let bias = read_f64(reader)?;
            units.push(Unit::from_parts(weights.into_boxed_slice(), bias));
        }
        layers.push(Layer::from_units(units.into_boxed_slice()));
    }
    validate_shape(&layers)?;
    Ok(Network::from_parts(layers.into_boxed_slice(), learning_rate))
}

/// A decoded file must describe a network the rest of the crate can operate
/// on: at least one non-empty layer, rectangular layers, and each layer's
/// weight counts agreeing with the previous layer's unit count.
fn validate_shape(layers: &[Layer]) -> Result<()> {
    if layers.is_empty() {
        return Err(malformed("stream holds no layers"));
    }
    for (i, layer) in layers.iter().enumerate() {
        let Some(first) = layer.units.first() else {
            return Err(malformed(format!("layer {i} holds no units")));
        };
        let expected = if i == 0 {
            first.weights.len()
        } else {
            layers[i - 1].units.len()
        };
        for (j, unit) in layer.units.iter().enumerate() {
            if unit.weights.len() != expected {
                return Err(malformed(format!(
                    "layer {i} unit {j} has {} weights, expected {expected}",
                    unit.weights.len()
                )));
            }
        }
    }
    Ok(())
}

fn malformed(message: impl Into<String>) -> crate::error::NetworkError {
    io::Error::new(io::ErrorKind::InvalidData, message.into()).into()
}

fn write_count<W: Write>(writer: &mut W, count: usize) -> Result<()> {
    let count = i32::try_from(count)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "count exceeds i32 range"))?;
    writer.write_all(&count.to_le_bytes())?;
    Ok(())
}

fn read_count<R: Read>(reader: &mut R, what: &str) -> Result<usize> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    let count = i32::from_le_bytes(buf);
    usize::try_from(count).map_err(|_| malformed(format!("negative {what} {count} in stream")))
}

fn write_f64<W: Write>(writer: &mut W, value: f64) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn read_f64<R: Read>(reader: &mut R) -> Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}
