/// Logistic activation: 1 / (1 + e^-x).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the logistic function expressed in terms of its own output:
/// for y = sigmoid(x), dy/dx = y * (1 - y). Units store their activation, so
/// the backward pass never needs the pre-activation sum.
pub fn sigmoid_derivative(output: f64) -> f64 {
    output * (1.0 - output)
}
