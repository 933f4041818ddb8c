// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example xor_and
fn main() {
    println!("perceptra: a minimal feedforward neural network with online backpropagation.");
    println!("Run `cargo run --example xor_and` to see the XOR/AND demo.");
}
