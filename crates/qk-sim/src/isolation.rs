//! Decay-envelope isolation of an integrated response.

use crate::error::{SimError, SimResult};
use crate::integrator::ensure_finite_state;
use crate::sim::Trajectory;

/// Envelope `exp(-ζ·ω·t)`.
#[inline]
pub fn decay_factor(damping_ratio: f64, omega: f64, t: f64) -> f64 {
    (-damping_ratio * omega * t).exp()
}

/// Envelope evaluated once per sample time.
pub fn decay_factors(t: &[f64], damping_ratio: f64, omega: f64) -> Vec<f64> {
    t.iter()
        .map(|&ti| decay_factor(damping_ratio, omega, ti))
        .collect()
}

/// Scale every state of `raw` by the envelope at its sample time.
///
/// `raw` is left untouched; the result is a fresh trajectory on the same
/// sample times.
pub fn isolate<const N: usize>(
    t: &[f64],
    damping_ratio: f64,
    omega: f64,
    raw: &Trajectory<N>,
) -> SimResult<Trajectory<N>> {
    let factors = decay_factors(t, damping_ratio, omega);
    apply_envelope(t, &factors, raw)
}

/// Scale every state of `raw` by precomputed envelope values.
///
/// A growing envelope (negative damping ratio) can overflow; any non-finite
/// damped state is an error.
pub fn apply_envelope<const N: usize>(
    t: &[f64],
    factors: &[f64],
    raw: &Trajectory<N>,
) -> SimResult<Trajectory<N>> {
    if t.len() != raw.len() || raw.t.len() != raw.len() || factors.len() != raw.len() {
        return Err(SimError::Invariant {
            what: "time grid and trajectory lengths differ",
        });
    }

    let x = raw
        .x
        .iter()
        .zip(factors)
        .zip(t)
        .map(|((state, &f), &ti)| {
            let damped = state * f;
            ensure_finite_state(&damped, "damped state", ti)?;
            Ok(damped)
        })
        .collect::<SimResult<Vec<_>>>()?;

    Ok(Trajectory { t: t.to_vec(), x })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use proptest::prelude::*;

    fn sample_trajectory() -> Trajectory {
        Trajectory {
            t: vec![0.0, 0.5, 1.0],
            x: vec![
                Vector2::new(0.0, 1.0),
                Vector2::new(0.4, 0.8),
                Vector2::new(-0.2, -0.6),
            ],
        }
    }

    #[test]
    fn envelope_is_one_at_origin() {
        assert_eq!(decay_factor(0.1, 31.4, 0.0), 1.0);
    }

    #[test]
    fn zero_ratio_leaves_trajectory_unchanged() {
        let raw = sample_trajectory();
        let damped = isolate(&raw.t, 0.0, 31.4, &raw).unwrap();
        assert_eq!(damped, raw);
    }

    #[test]
    fn zero_frequency_leaves_trajectory_unchanged() {
        let raw = sample_trajectory();
        let damped = isolate(&raw.t, 0.3, 0.0, &raw).unwrap();
        assert_eq!(damped, raw);
    }

    #[test]
    fn both_channels_share_the_factor() {
        let raw = sample_trajectory();
        let damped = isolate(&raw.t, 0.5, 2.0, &raw).unwrap();
        let f = (-1.0f64).exp();
        assert_eq!(damped.x[2], Vector2::new(-0.2 * f, -0.6 * f));
        assert_eq!(damped.x[0], raw.x[0]);
    }

    #[test]
    fn raw_trajectory_is_not_modified() {
        let raw = sample_trajectory();
        let copy = raw.clone();
        let _ = isolate(&raw.t, 2.0, 10.0, &raw).unwrap();
        assert_eq!(raw, copy);
    }

    #[test]
    fn overflowing_envelope_is_an_error() {
        let raw = sample_trajectory();
        let err = isolate(&raw.t, -1.0, 2000.0, &raw).unwrap_err();
        assert_eq!(
            err,
            SimError::NonFinite {
                what: "damped state",
                t: 0.5
            }
        );
    }

    #[test]
    fn envelope_length_mismatch_is_rejected() {
        let raw = sample_trajectory();
        let err = apply_envelope(&raw.t, &[1.0, 1.0], &raw).unwrap_err();
        assert!(matches!(err, SimError::Invariant { .. }));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let raw = sample_trajectory();
        let err = isolate(&[0.0, 1.0], 0.1, 1.0, &raw).unwrap_err();
        assert!(matches!(err, SimError::Invariant { .. }));
    }

    proptest! {
        #[test]
        fn envelope_non_increasing(
            zeta in 0.0f64..5.0,
            omega in 0.0f64..500.0,
            duration in 0.0f64..100.0,
            n in 2usize..500,
        ) {
            let t = qk_core::linspace(0.0, duration, n);
            let f = decay_factors(&t, zeta, omega);
            prop_assert_eq!(f[0], 1.0);
            for w in f.windows(2) {
                prop_assert!(w[1] <= w[0]);
            }
            for v in &f {
                prop_assert!((0.0..=1.0).contains(v));
            }
        }
    }
}
