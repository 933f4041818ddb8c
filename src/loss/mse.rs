pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_for_perfect_prediction() {
        assert_relative_eq!(MseLoss::loss(&[0.25, 0.75], &[0.25, 0.75]), 0.0);
    }

    #[test]
    fn mean_of_squared_residuals() {
        // residuals 0.5 and -0.5, squared 0.25 each
        assert_relative_eq!(MseLoss::loss(&[1.0, 0.0], &[0.5, 0.5]), 0.25);
    }
}
