// qk-core/src/units.rs

use uom::si::f64::{
    AngularVelocity as UomAngularVelocity, Frequency as UomFrequency, Length as UomLength,
    Mass as UomMass, Ratio as UomRatio, Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type AngularVelocity = UomAngularVelocity;
pub type Frequency = UomFrequency;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Ratio = UomRatio;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Angular frequency `ω = 2π·f`.
#[inline]
pub fn angular_frequency(f: Frequency) -> AngularVelocity {
    use uom::si::angular_velocity::radian_per_second;
    use uom::si::frequency::hertz;
    AngularVelocity::new::<radian_per_second>(std::f64::consts::TAU * f.get::<hertz>())
}

/// Plain SI accessors, used where the numeric core works in raw `f64`.
pub mod si {
    use super::*;

    #[inline]
    pub fn meters(v: Length) -> f64 {
        v.get::<uom::si::length::meter>()
    }

    #[inline]
    pub fn meters_per_second(v: Velocity) -> f64 {
        v.get::<uom::si::velocity::meter_per_second>()
    }

    #[inline]
    pub fn kilograms(v: Mass) -> f64 {
        v.get::<uom::si::mass::kilogram>()
    }

    #[inline]
    pub fn hertz(v: Frequency) -> f64 {
        v.get::<uom::si::frequency::hertz>()
    }

    #[inline]
    pub fn radians_per_second(v: AngularVelocity) -> f64 {
        v.get::<uom::si::angular_velocity::radian_per_second>()
    }

    #[inline]
    pub fn seconds(v: Time) -> f64 {
        v.get::<uom::si::time::second>()
    }

    #[inline]
    pub fn ratio(v: Ratio) -> f64 {
        v.get::<uom::si::ratio::ratio>()
    }
}
