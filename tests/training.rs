use approx::assert_relative_eq;
use perceptra::{train_loop, Network, Sample};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Four input pairs with XOR as target 0 and AND as target 1.
fn gate_samples() -> Vec<Sample> {
    vec![
        (vec![1.0, 1.0], vec![0.0, 1.0]),
        (vec![1.0, 0.0], vec![1.0, 0.0]),
        (vec![0.0, 1.0], vec![1.0, 0.0]),
        (vec![0.0, 0.0], vec![0.0, 0.0]),
    ]
}

#[test]
fn learns_xor_and_and_simultaneously() {
    // Sigmoid XOR nets can stall in a local minimum for an unlucky init, so
    // restart across a few seeds; any one converging passes.
    let converged = [7u64, 42, 1234, 9000].iter().any(|&seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut net = Network::with_rng(&[2, 3, 2], 1.0, &mut rng).unwrap();
        for _ in 0..100_000 {
            for (input, target) in gate_samples() {
                net.train(&input, &target).unwrap();
            }
        }
        gate_samples().iter().all(|(input, target)| {
            let out = net.predict(input).unwrap();
            (out[0] - target[0]).abs() < 0.1 && (out[1] - target[1]).abs() < 0.1
        })
    });
    assert!(converged, "no seed reached 0.1 of both gate outputs");
}

#[test]
fn mean_squared_error_trends_downward() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut net = Network::with_rng(&[2, 3, 2], 0.5, &mut rng).unwrap();
    let stats = train_loop(&mut net, &gate_samples(), 5000).unwrap();

    let head: f64 = stats[..10].iter().map(|s| s.train_loss).sum::<f64>() / 10.0;
    let tail: f64 = stats[stats.len() - 10..]
        .iter()
        .map(|s| s.train_loss)
        .sum::<f64>()
        / 10.0;
    assert!(
        tail < head,
        "mse rose over 5000 epochs: head {head}, tail {tail}"
    );
}

#[test]
fn one_train_step_applies_exactly_lr_times_error_times_input() {
    let mut rng = StdRng::seed_from_u64(32);
    let mut net = Network::with_rng(&[2, 2, 1], 0.5, &mut rng).unwrap();
    let snapshot = net.clone();
    let input = [1.0, 0.5];
    let target = [1.0];
    let lr = net.learning_rate();

    net.train(&input, &target).unwrap();

    // Replay the forward pass on the snapshot to capture the activations the
    // update was computed against.
    let mut replay = snapshot.clone();
    replay.predict(&input).unwrap();
    let hidden = replay.layers()[0].outputs();
    let out = replay.layers()[1].outputs()[0];

    let err_out = out * (1.0 - out) * (target[0] - out);
    let out_weights = snapshot.layers()[1].units()[0].weights();
    let err_hidden: Vec<f64> = hidden
        .iter()
        .enumerate()
        .map(|(j, &h)| h * (1.0 - h) * (err_out * out_weights[j]))
        .collect();

    // Output layer deltas: lr * error * hidden activation.
    let unit = &net.layers()[1].units()[0];
    let unit_before = &snapshot.layers()[1].units()[0];
    assert_relative_eq!(unit.error(), err_out, epsilon = 1e-12);
    assert_relative_eq!(
        unit.bias() - unit_before.bias(),
        lr * err_out,
        epsilon = 1e-12
    );
    for (j, &h) in hidden.iter().enumerate() {
        assert_relative_eq!(
            unit.weights()[j] - unit_before.weights()[j],
            lr * err_out * h,
            epsilon = 1e-12
        );
    }

    // Hidden layer deltas: lr * error * external input, with errors built
    // from the output layer's pre-update weights.
    for (j, unit) in net.layers()[0].units().iter().enumerate() {
        let unit_before = &snapshot.layers()[0].units()[j];
        assert_relative_eq!(unit.error(), err_hidden[j], epsilon = 1e-12);
        assert_relative_eq!(
            unit.bias() - unit_before.bias(),
            lr * err_hidden[j],
            epsilon = 1e-12
        );
        for (k, &x) in input.iter().enumerate() {
            assert_relative_eq!(
                unit.weights()[k] - unit_before.weights()[k],
                lr * err_hidden[j] * x,
                epsilon = 1e-12
            );
        }
    }
}
