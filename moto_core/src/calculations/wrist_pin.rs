//! # Wrist Pin Sizing
//!
//! Proportions a hollow wrist (gudgeon) pin from the piston diameter and
//! checks boss bearing pressure and pin bending stress under peak gas load.
//!
//! Proportions used:
//! - outer diameter 0.35 × piston diameter
//! - inner diameter 0.6 × outer diameter
//! - bearing length 0.4 × piston diameter
//! - span between bosses 0.5 × piston diameter

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;

/// Input parameters for wrist pin sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WristPinInput {
    /// mm
    pub piston_diameter: f64,
    /// MPa
    pub max_gas_pressure: f64,
    /// MPa
    pub wrist_pin_material_yield_strength: f64,
}

impl InputSchema for WristPinInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("piston_diameter", "Piston diameter", "mm", "80"),
        FieldSpec::float("max_gas_pressure", "Max gas pressure", "MPa", "6"),
        FieldSpec::float("wrist_pin_material_yield_strength", "Pin yield strength", "MPa", "900"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        WristPinInput {
            piston_diameter: r.float("piston_diameter"),
            max_gas_pressure: r.float("max_gas_pressure"),
            wrist_pin_material_yield_strength: r.float("wrist_pin_material_yield_strength"),
        }
    }
}

/// Results from wrist pin sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WristPinResult {
    pub outer_diameter_mm: f64,
    pub inner_diameter_mm: f64,
    /// MPa; 0 without bearing area
    pub bearing_pressure_mpa: f64,
    /// MPa; 0 without section
    pub bending_stress_mpa: f64,
    pub safety_factor: Measure,
}

/// Size a wrist pin.
pub fn calculate(input: &WristPinInput) -> WristPinResult {
    let d = input.piston_diameter;
    let outer = d * 0.35;
    let inner = outer * 0.6;

    let max_gas_force = (PI / 4.0) * d.powi(2) * input.max_gas_pressure;

    let bearing_area = outer * (d * 0.4);
    let bearing_pressure = if bearing_area > 0.0 { max_gas_force / bearing_area } else { 0.0 };

    let length_between_bosses = d * 0.5;
    let bending_moment = max_gas_force * length_between_bosses / 8.0;
    let section_modulus = (PI / 32.0) * ((outer.powi(4) - inner.powi(4)) / outer);
    let bending_stress = if section_modulus > 0.0 { bending_moment / section_modulus } else { 0.0 };

    WristPinResult {
        outer_diameter_mm: outer,
        inner_diameter_mm: inner,
        bearing_pressure_mpa: bearing_pressure,
        bending_stress_mpa: bending_stress,
        safety_factor: Measure::ratio_or_infinite(
            input.wrist_pin_material_yield_strength,
            bending_stress,
        ),
    }
}

impl ToReport for WristPinResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::WristPin)
            .number("wrist_pin_outer_diameter", "Outer diameter", self.outer_diameter_mm, 2, "mm")
            .number("wrist_pin_inner_diameter", "Inner diameter", self.inner_diameter_mm, 2, "mm")
            .number("bearing_pressure", "Bearing pressure", self.bearing_pressure_mpa, 2, "MPa")
            .number("bending_stress", "Bending stress", self.bending_stress_mpa, 2, "MPa")
            .measure("safety_factor", "Safety factor", self.safety_factor, 2, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pin() -> WristPinInput {
        WristPinInput {
            piston_diameter: 80.0,
            max_gas_pressure: 6.0,
            wrist_pin_material_yield_strength: 900.0,
        }
    }

    #[test]
    fn test_proportions() {
        let result = calculate(&test_pin());
        assert!((result.outer_diameter_mm - 28.0).abs() < 1e-9);
        assert!((result.inner_diameter_mm - 16.8).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_pressure() {
        let result = calculate(&test_pin());
        let force = PI / 4.0 * 6400.0 * 6.0;
        assert!((result.bearing_pressure_mpa - force / (28.0 * 32.0)).abs() < 1e-9);
    }

    #[test]
    fn test_bending_and_safety() {
        let result = calculate(&test_pin());
        let force = PI / 4.0 * 6400.0 * 6.0;
        let moment = force * 40.0 / 8.0;
        let z = PI / 32.0 * (28f64.powi(4) - 16.8f64.powi(4)) / 28.0;
        assert!((result.bending_stress_mpa - moment / z).abs() < 1e-6);
        let sf = result.safety_factor.value().unwrap();
        assert!((sf - 900.0 / (moment / z)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_diameter_is_guarded() {
        let mut pin = test_pin();
        pin.piston_diameter = 0.0;
        let result = calculate(&pin);
        assert_eq!(result.bearing_pressure_mpa, 0.0);
        assert_eq!(result.bending_stress_mpa, 0.0);
        assert!(result.safety_factor.is_infinite());
    }
}
