use crate::QkError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, QkError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(QkError::NonFinite { what, value: v })
    }
}

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
///
/// The last sample is pinned to `stop` so accumulated rounding never
/// overshoots the interval.
pub fn linspace(start: Real, stop: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as Real;
            let mut out: Vec<Real> = (0..n).map(|i| start + step * i as Real).collect();
            out[n - 1] = stop;
            out
        }
    }
}
