//! Trains one 2-3-2 network to compute XOR on output 0 and AND on output 1,
//! then saves it and restores it from disk.

use perceptra::{Network, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut net = Network::new(&[2, 3, 2], 1.0)?;

    // Targets are {XOR, AND} for each input pair.
    for _ in 0..100_000 {
        net.train(&[1.0, 1.0], &[0.0, 1.0])?;
        net.train(&[1.0, 0.0], &[1.0, 0.0])?;
        net.train(&[0.0, 1.0], &[1.0, 0.0])?;
        net.train(&[0.0, 0.0], &[0.0, 0.0])?;
    }

    println!("input      XOR (expected)   AND (expected)");
    for (a, b) in [(1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)] {
        let out = net.predict(&[a, b])?;
        let xor = if a != b { 1.0 } else { 0.0 };
        let and = if a == 1.0 && b == 1.0 { 1.0 } else { 0.0 };
        println!(
            "({a}, {b})   {:.10} ({xor})   {:.10} ({and})",
            out[0], out[1]
        );
    }

    net.save("net.bin")?;
    let mut restored = Network::from_file("net.bin")?;
    let check = restored.predict(&[1.0, 0.0])?;
    println!("\nrestored from net.bin, (1, 0) -> XOR {:.10}", check[0]);

    Ok(())
}
