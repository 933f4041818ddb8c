use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::network::Network;

/// A serializable description of a network architecture, stored separately
/// from trained weights.
///
/// Specs can be saved to / loaded from JSON before any training happens,
/// making it possible to keep architecture presets around and build fresh
/// networks from them on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the model file stem.
    pub name: String,
    /// Per-layer sizes, input dimension first.
    pub topology: Vec<usize>,
    pub learning_rate: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl NetworkSpec {
    /// Builds a freshly-initialized network matching this spec.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<Network> {
        Network::with_rng(&self.topology, self.learning_rate, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetworkSpec> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let spec = serde_json::from_reader(reader)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn json_round_trip() {
        let spec = NetworkSpec {
            name: "gates".to_string(),
            topology: vec![2, 3, 2],
            learning_rate: 1.0,
            description: Some("XOR and AND heads".to_string()),
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: NetworkSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, spec.name);
        assert_eq!(back.topology, spec.topology);
        assert_eq!(back.learning_rate, spec.learning_rate);
        assert_eq!(back.description, spec.description);
    }

    #[test]
    fn missing_description_defaults_to_none() {
        let json = r#"{"name":"tiny","topology":[2,1],"learning_rate":0.5}"#;
        let spec: NetworkSpec = serde_json::from_str(json).unwrap();
        assert!(spec.description.is_none());
    }

    #[test]
    fn build_honors_topology_and_rate() {
        let spec = NetworkSpec {
            name: "tiny".to_string(),
            topology: vec![4, 5, 3],
            learning_rate: 0.1,
            description: None,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let net = spec.build(&mut rng).unwrap();
        assert_eq!(net.topology(), spec.topology);
        assert_eq!(net.learning_rate(), 0.1);
    }
}
