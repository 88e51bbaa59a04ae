// src/ops.rs
// Shape-checked wrappers around the ndarray products used by the models.
// ndarray panics on incompatible shapes; these return a descriptive error instead.

use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};

/// Matrix multiplication: output = a @ b
pub fn matmul<S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix2>,
) -> Result<Array2<f64>, String>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if a.ncols() != b.nrows() {
        return Err(format!(
            "Matrix multiplication shape mismatch: ({}, {}) @ ({}, {})",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        ));
    }

    Ok(a.dot(b))
}

/// Matrix-vector product: output = a @ v
pub fn matvec<S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    v: &ArrayBase<S2, Ix1>,
) -> Result<Array1<f64>, String>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if a.ncols() != v.len() {
        return Err(format!(
            "Matrix-vector shape mismatch: ({}, {}) @ ({},)",
            a.nrows(),
            a.ncols(),
            v.len()
        ));
    }

    Ok(a.dot(v))
}

/// Checks that `what` has exactly `expected` rows.
pub fn check_rows(what: &str, rows: usize, expected: usize) -> Result<(), String> {
    if rows != expected {
        return Err(format!(
            "Shape mismatch: {} has {} rows but the input has {}",
            what, rows, expected
        ));
    }
    Ok(())
}
