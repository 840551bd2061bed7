//! # Unit Types
//!
//! Type-safe wrappers for the engineering units that appear on the input
//! forms, plus the SI base units the calculations work in. These are plain
//! f64 newtypes: conversions happen through `From`, and JSON stays clean
//! (just numbers).
//!
//! ## Display vs. SI
//!
//! Forms accept conventional workshop units:
//! - Length: millimetres (mm), inches (rim sizes)
//! - Speed: kilometres per hour (km/h)
//! - Pressure / stress: megapascals (MPa)
//! - Area: square centimetres (cm²)
//! - Rotational speed: revolutions per minute (rpm)
//!
//! Calculations convert to metres, m/s, pascals, m² and rad/s first.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::units::{KilometresPerHour, MetresPerSecond, Millimetres, Metres};
//!
//! let v: MetresPerSecond = KilometresPerHour(36.0).into();
//! assert!((v.0 - 10.0).abs() < 1e-12);
//!
//! let d: Metres = Millimetres(280.0).into();
//! assert!((d.0 - 0.28).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Length in inches (rim and wheel sizes)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

impl From<Inches> for Millimetres {
    fn from(inches: Inches) -> Self {
        Millimetres(inches.0 * MM_PER_INCH)
    }
}

// ============================================================================
// Speed Units
// ============================================================================

/// Speed in kilometres per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilometresPerHour(pub f64);

/// Speed in metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetresPerSecond(pub f64);

impl From<KilometresPerHour> for MetresPerSecond {
    fn from(kmh: KilometresPerHour) -> Self {
        MetresPerSecond(kmh.0 * 1000.0 / 3600.0)
    }
}

/// Rotational speed in revolutions per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub f64);

/// Angular velocity in radians per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadiansPerSecond(pub f64);

impl From<Rpm> for RadiansPerSecond {
    fn from(rpm: Rpm) -> Self {
        RadiansPerSecond(rpm.0 * 2.0 * std::f64::consts::PI / 60.0)
    }
}

// ============================================================================
// Pressure / Stress Units
// ============================================================================

/// Pressure or stress in megapascals (numerically N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Pressure or stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1e6)
    }
}

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1e6)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimetres(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMetres(pub f64);

impl From<SquareCentimetres> for SquareMetres {
    fn from(cm2: SquareCentimetres) -> Self {
        SquareMetres(cm2.0 / 10_000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Millimetres);
impl_arithmetic!(Metres);
impl_arithmetic!(Inches);
impl_arithmetic!(KilometresPerHour);
impl_arithmetic!(MetresPerSecond);
impl_arithmetic!(Rpm);
impl_arithmetic!(RadiansPerSecond);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Pascals);
impl_arithmetic!(SquareCentimetres);
impl_arithmetic!(SquareMetres);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_metres() {
        let m: Metres = Millimetres(280.0).into();
        assert!((m.0 - 0.28).abs() < 1e-12);
        let back: Millimetres = m.into();
        assert!((back.0 - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_kmh_to_ms() {
        let v: MetresPerSecond = KilometresPerHour(60.0).into();
        assert!((v.0 - 16.6667).abs() < 1e-3);
    }

    #[test]
    fn test_pressure_and_area() {
        let pa: Pascals = Megapascals(10.0).into();
        assert_eq!(pa.0, 1e7);
        let mpa: Megapascals = Pascals(2.5e6).into();
        assert_eq!(mpa.0, 2.5);
        let a: SquareMetres = SquareCentimetres(4.0).into();
        assert!((a.0 - 4e-4).abs() < 1e-15);
    }

    #[test]
    fn test_rpm_to_rad_per_sec() {
        let w: RadiansPerSecond = Rpm(60.0).into();
        assert!((w.0 - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_inches_to_mm() {
        let mm: Millimetres = Inches(17.0).into();
        assert!((mm.0 - 431.8).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimetres(10.0);
        let b = Millimetres(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimetres(12.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "12.5");
        let roundtrip: Millimetres = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
