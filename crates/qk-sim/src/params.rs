//! Validated physical parameters for one simulation run.

use qk_core::units::{self, Frequency, Length, Mass, Ratio, Time, Velocity};
use qk_core::{Real, ensure_finite};

use crate::error::{SimError, SimResult};

/// Immutable, validated parameter set.
///
/// Invariants established by the constructors:
/// - every value is finite
/// - `mass != 0`
/// - `duration >= 0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSet {
    length: Real,
    wave_speed: Real,
    stiffness: Real,
    mass: Real,
    frequency: Real,
    duration: Real,
    damping_ratio: Real,
}

impl ParameterSet {
    /// Build from raw SI values (m, m/s, N/m, kg, Hz, s, dimensionless).
    pub fn from_si(
        length_m: Real,
        wave_speed_mps: Real,
        stiffness_n_per_m: Real,
        mass_kg: Real,
        frequency_hz: Real,
        duration_s: Real,
        damping_ratio: Real,
    ) -> SimResult<Self> {
        let length = ensure_finite(length_m, "length")?;
        let wave_speed = ensure_finite(wave_speed_mps, "wave speed")?;
        let stiffness = ensure_finite(stiffness_n_per_m, "stiffness")?;
        let mass = ensure_finite(mass_kg, "mass")?;
        let frequency = ensure_finite(frequency_hz, "frequency")?;
        let duration = ensure_finite(duration_s, "duration")?;
        let damping_ratio = ensure_finite(damping_ratio, "damping ratio")?;

        if mass == 0.0 {
            return Err(SimError::InvalidParameter {
                what: "mass must be non-zero",
            });
        }
        if duration < 0.0 {
            return Err(SimError::InvalidParameter {
                what: "duration must be non-negative",
            });
        }
        // Both stay legal inputs; they only turn the envelope into growth.
        if damping_ratio < 0.0 {
            tracing::warn!(damping_ratio, "negative damping ratio amplifies the response");
        }
        if frequency < 0.0 {
            tracing::warn!(frequency, "negative excitation frequency");
        }

        let omega = std::f64::consts::TAU * frequency;
        ensure_finite(omega, "angular frequency")?;

        Ok(Self {
            length,
            wave_speed,
            stiffness,
            mass,
            frequency,
            duration,
            damping_ratio,
        })
    }

    /// Build from typed quantities. Stiffness has no uom quantity and stays
    /// in N/m.
    pub fn from_quantities(
        length: Length,
        wave_speed: Velocity,
        stiffness_n_per_m: Real,
        mass: Mass,
        frequency: Frequency,
        duration: Time,
        damping_ratio: Ratio,
    ) -> SimResult<Self> {
        Self::from_si(
            units::si::meters(length),
            units::si::meters_per_second(wave_speed),
            stiffness_n_per_m,
            units::si::kilograms(mass),
            units::si::hertz(frequency),
            units::si::seconds(duration),
            units::si::ratio(damping_ratio),
        )
    }

    /// Structure length in m. Informational only.
    pub fn length(&self) -> Real {
        self.length
    }

    pub fn wave_speed(&self) -> Real {
        self.wave_speed
    }

    pub fn stiffness(&self) -> Real {
        self.stiffness
    }

    pub fn mass(&self) -> Real {
        self.mass
    }

    /// Excitation frequency in Hz.
    pub fn frequency(&self) -> Real {
        self.frequency
    }

    /// Angular excitation frequency `ω = 2π·f` in rad/s.
    pub fn angular_frequency(&self) -> Real {
        units::si::radians_per_second(units::angular_frequency(units::hz(self.frequency)))
    }

    pub fn duration(&self) -> Real {
        self.duration
    }

    pub fn damping_ratio(&self) -> Real {
        self.damping_ratio
    }
}

impl Default for ParameterSet {
    /// The demonstration defaults: a 100 m structure, unit wave speed,
    /// stiffness and mass, 5 Hz excitation over 20 s with ζ = 0.1.
    fn default() -> Self {
        Self {
            length: 100.0,
            wave_speed: 1.0,
            stiffness: 1.0,
            mass: 1.0,
            frequency: 5.0,
            duration: 20.0,
            damping_ratio: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qk_core::units::{hz, kg, m, mps, s, unitless};

    #[test]
    fn rejects_zero_mass() {
        let err = ParameterSet::from_si(100.0, 1.0, 1.0, 0.0, 5.0, 20.0, 0.1).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidParameter {
                what: "mass must be non-zero"
            }
        );
    }

    #[test]
    fn rejects_negative_zero_mass() {
        assert!(ParameterSet::from_si(100.0, 1.0, 1.0, -0.0, 5.0, 20.0, 0.1).is_err());
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(ParameterSet::from_si(100.0, 1.0, 1.0, 1.0, 5.0, -1.0, 0.1).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(ParameterSet::from_si(100.0, f64::NAN, 1.0, 1.0, 5.0, 20.0, 0.1).is_err());
        assert!(ParameterSet::from_si(100.0, 1.0, f64::INFINITY, 1.0, 5.0, 20.0, 0.1).is_err());
    }

    #[test]
    fn zero_duration_is_allowed() {
        let p = ParameterSet::from_si(100.0, 1.0, 1.0, 1.0, 5.0, 0.0, 0.0).unwrap();
        assert_eq!(p.duration(), 0.0);
    }

    #[test]
    fn quantities_match_si_constructor() {
        let a = ParameterSet::from_quantities(
            m(100.0),
            mps(1.0),
            1.0,
            kg(1.0),
            hz(5.0),
            s(20.0),
            unitless(0.1),
        )
        .unwrap();
        assert_eq!(a, ParameterSet::default());
    }

    #[test]
    fn angular_frequency_from_default() {
        let w = ParameterSet::default().angular_frequency();
        assert!((w - 2.0 * std::f64::consts::PI * 5.0).abs() < 1e-12);
    }
}
