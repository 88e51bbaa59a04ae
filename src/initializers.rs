use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};
use rand_distr::{Distribution, Normal, StandardNormal, Uniform};

/// Strategy used to draw the initial weights of a model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WeightInit {
    /// Samples from N(0, 1)
    #[default]
    StandardNormal,
    /// Samples from U(0, 1)
    Uniform,
    /// Xavier/Glorot uniform: U(-a, a) where a = gain * sqrt(6 / (fan_in + fan_out))
    XavierUniform { gain: f64 },
    /// Xavier/Glorot normal: N(0, std) where std = gain * sqrt(2 / (fan_in + fan_out))
    XavierNormal { gain: f64 },
}

/// Returns a seeded generator when `seed` is given, otherwise one seeded from the thread RNG.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rng()),
    }
}

fn check_gain(gain: f64) -> Result<(), String> {
    if !gain.is_finite() || gain < 0.0 {
        return Err(format!(
            "Xavier gain must be finite and non-negative, got {}",
            gain
        ));
    }
    Ok(())
}

/// Xavier/Glorot uniform initialization
pub fn xavier_uniform<R: Rng + ?Sized>(
    fan_in: usize,
    fan_out: usize,
    gain: f64,
) -> Result<impl FnMut(&mut R) -> f64, String> {
    check_gain(gain)?;
    let a = gain * (6.0 / (fan_in + fan_out) as f64).sqrt();
    let uniform = Uniform::new_inclusive(-a, a)
        .map_err(|e| format!("Invalid xavier uniform bound {}: {}", a, e))?;

    Ok(move |rng: &mut R| uniform.sample(rng))
}

/// Xavier/Glorot normal initialization
pub fn xavier_normal<R: Rng + ?Sized>(
    fan_in: usize,
    fan_out: usize,
    gain: f64,
) -> Result<impl FnMut(&mut R) -> f64, String> {
    check_gain(gain)?;
    let std = gain * (2.0 / (fan_in + fan_out) as f64).sqrt();
    let normal =
        Normal::new(0.0, std).map_err(|e| format!("Invalid xavier normal std {}: {}", std, e))?;

    Ok(move |rng: &mut R| normal.sample(rng))
}

// Draws `len` values with the given strategy. fan_in/fan_out only matter for Xavier.
fn sample_values<R: Rng + ?Sized>(
    len: usize,
    fan_in: usize,
    fan_out: usize,
    init: WeightInit,
    rng: &mut R,
) -> Result<Vec<f64>, String> {
    let data: Vec<f64> = match init {
        WeightInit::StandardNormal => (0..len)
            .map(|_| {
                let value: f64 = StandardNormal.sample(&mut *rng);
                value
            })
            .collect(),
        WeightInit::Uniform => {
            let uniform = Uniform::new(0.0, 1.0).map_err(|e| e.to_string())?;
            (0..len).map(|_| uniform.sample(&mut *rng)).collect()
        }
        WeightInit::XavierUniform { gain } => {
            let mut initializer = xavier_uniform::<R>(fan_in, fan_out, gain)?;
            (0..len).map(|_| initializer(&mut *rng)).collect()
        }
        WeightInit::XavierNormal { gain } => {
            let mut initializer = xavier_normal::<R>(fan_in, fan_out, gain)?;
            (0..len).map(|_| initializer(&mut *rng)).collect()
        }
    };
    Ok(data)
}

/// Builds a (rows x cols) weight matrix. Rows are the fan-in, columns the fan-out.
pub fn init_matrix<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    init: WeightInit,
    rng: &mut R,
) -> Result<Array2<f64>, String> {
    let data = sample_values(rows * cols, rows, cols, init, rng)?;
    Array2::from_shape_vec((rows, cols), data)
        .map_err(|e| format!("Failed to create ({}, {}) weight matrix: {}", rows, cols, e))
}

/// Builds a weight vector of length `len`, treated as a (len x 1) projection.
pub fn init_vector<R: Rng + ?Sized>(
    len: usize,
    init: WeightInit,
    rng: &mut R,
) -> Result<Array1<f64>, String> {
    Ok(Array1::from(sample_values(len, len, 1, init, rng)?))
}
