use ndarray::{Array, ArrayBase, Data, Dimension};

// Sigmoid activation function.
//
// Applies sigmoid(x) = 1 / (1 + e^-x) element-wise.
// There is no guard against overflow: for very negative inputs e^-x becomes infinite
// and the result saturates to exactly 0, for very positive inputs to exactly 1.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Element-wise sigmoid over an array of any dimensionality.
pub fn sigmoid_array<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(sigmoid)
}

/// Derivative of the sigmoid written in terms of its output: a * (1 - a).
pub fn sigmoid_derivative_from_output(a: f64) -> f64 {
    a * (1.0 - a)
}

pub fn sigmoid_derivative_array<S, D>(a: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    a.mapv(sigmoid_derivative_from_output)
}
