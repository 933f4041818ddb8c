use std::time::Instant;

use log::debug;

use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;

/// One (input, target) training pair.
pub type Sample = (Vec<f64>, Vec<f64>);

/// Runs one online pass over `samples`, training on each pair in order, and
/// returns the mean squared error measured before each update.
///
/// # Panics
/// Panics if `samples` is empty.
pub fn train_epoch(network: &mut Network, samples: &[Sample]) -> Result<f64> {
    assert!(!samples.is_empty(), "samples must not be empty");

    let mut total_loss = 0.0;
    for (input, target) in samples {
        let output = network.predict(input)?;
        total_loss += MseLoss::loss(&output, target);
        network.train(input, target)?;
    }
    Ok(total_loss / samples.len() as f64)
}

/// Trains `network` for `epochs` full passes over `samples` and returns one
/// `EpochStats` per completed epoch.
pub fn train_loop(network: &mut Network, samples: &[Sample], epochs: usize) -> Result<Vec<EpochStats>> {
    let mut stats = Vec::with_capacity(epochs);
    for epoch in 1..=epochs {
        let t_start = Instant::now();
        let train_loss = train_epoch(network, samples)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        if epoch % 1000 == 0 || epoch == epochs {
            debug!("epoch {epoch}/{epochs}: mse = {train_loss:.6}");
        }

        stats.push(EpochStats {
            epoch,
            total_epochs: epochs,
            train_loss,
            elapsed_ms,
        });
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn and_gate_samples() -> Vec<Sample> {
        vec![
            (vec![1.0, 1.0], vec![1.0]),
            (vec![1.0, 0.0], vec![0.0]),
            (vec![0.0, 1.0], vec![0.0]),
            (vec![0.0, 0.0], vec![0.0]),
        ]
    }

    #[test]
    fn epoch_loss_shrinks_over_training() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut net = Network::with_rng(&[2, 2, 1], 0.5, &mut rng).unwrap();
        let samples = and_gate_samples();
        let first = train_epoch(&mut net, &samples).unwrap();
        for _ in 0..500 {
            train_epoch(&mut net, &samples).unwrap();
        }
        let last = train_epoch(&mut net, &samples).unwrap();
        assert!(last < first);
    }

    #[test]
    fn loop_reports_one_stat_per_epoch() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut net = Network::with_rng(&[2, 2, 1], 0.5, &mut rng).unwrap();
        let stats = train_loop(&mut net, &and_gate_samples(), 10).unwrap();
        assert_eq!(stats.len(), 10);
        assert_eq!(stats[0].epoch, 1);
        assert_eq!(stats[9].epoch, 10);
        assert!(stats.iter().all(|s| s.total_epochs == 10));
    }
}
