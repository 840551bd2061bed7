//! # Brake Caliper Sizing
//!
//! Works back from a required braking torque to the clamp force the
//! caliper must generate and the piston diameter that delivers it at a
//! given line pressure.
//!
//! ## Assumptions
//!
//! - Two friction faces per disc
//! - Clamp force shared equally between pistons
//! - Caliper body stress uses a fixed 1000 mm² placeholder section

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{Megapascals, Metres, Millimetres, Pascals, SquareCentimetres, SquareMetres};

/// Placeholder caliper body cross-section (m²)
pub const CALIPER_SECTION_M2: f64 = 0.001;

/// Input parameters for caliper sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaliperInput {
    /// Braking torque the caliper(s) must react (Nm)
    pub required_braking_torque: f64,
    pub number_of_pistons: u32,
    /// Line pressure (MPa)
    pub hydraulic_pressure: f64,
    /// Pad area in contact with the disc (cm²)
    pub pad_contact_area: f64,
    pub number_of_discs: u32,
    /// Caliper body yield strength (MPa)
    pub caliper_material_yield_strength: f64,
    /// Disc effective radius (m)
    pub disc_effective_radius: f64,
    pub friction_coefficient: f64,
}

impl InputSchema for CaliperInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("required_braking_torque", "Required braking torque", "Nm", "800"),
        FieldSpec::int("number_of_pistons", "Number of pistons", "", "4"),
        FieldSpec::float("hydraulic_pressure", "Hydraulic pressure", "MPa", "10"),
        FieldSpec::float("pad_contact_area", "Pad contact area", "cm²", "25"),
        FieldSpec::int("number_of_discs", "Number of discs", "", "2"),
        FieldSpec::float("caliper_material_yield_strength", "Caliper yield strength", "MPa", "250"),
        FieldSpec::float("disc_effective_radius", "Disc effective radius", "m", "0.13"),
        FieldSpec::float("friction_coefficient", "Friction coefficient", "", "0.4"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        CaliperInput {
            required_braking_torque: r.float("required_braking_torque"),
            number_of_pistons: r.int("number_of_pistons"),
            hydraulic_pressure: r.float("hydraulic_pressure"),
            pad_contact_area: r.float("pad_contact_area"),
            number_of_discs: r.int("number_of_discs"),
            caliper_material_yield_strength: r.float("caliper_material_yield_strength"),
            disc_effective_radius: r.float("disc_effective_radius"),
            friction_coefficient: r.float("friction_coefficient"),
        }
    }
}

/// Results from caliper sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaliperResult {
    /// Total clamp force over all discs (N)
    pub total_clamp_force_n: f64,
    pub clamp_force_per_piston_n: f64,
    pub piston_diameter_mm: f64,
    /// Torque produced by the computed clamp force (Nm)
    pub brake_torque_delivered_nm: f64,
    /// Mean pad contact pressure (MPa); 0 without pad area
    pub pad_pressure_mpa: f64,
    pub caliper_stress_mpa: f64,
    pub safety_factor: Measure,
}

/// Size a brake caliper.
pub fn calculate(input: &CaliperInput) -> CaliperResult {
    let pressure: Pascals = Megapascals(input.hydraulic_pressure).into();
    let pad_area: SquareMetres = SquareCentimetres(input.pad_contact_area).into();

    let friction_faces = f64::from(input.number_of_discs) * 2.0;
    let torque_per_newton =
        input.friction_coefficient * input.disc_effective_radius * friction_faces;

    let total_clamp_force = input.required_braking_torque / torque_per_newton;
    let clamp_force_per_piston = total_clamp_force / f64::from(input.number_of_pistons);
    let piston_area = clamp_force_per_piston / pressure.0;
    let piston_diameter = Metres(2.0 * (piston_area / PI).sqrt());
    let brake_torque_delivered = total_clamp_force * torque_per_newton;

    let pad_pressure = if pad_area.0 > 0.0 {
        Megapascals::from(Pascals(total_clamp_force / pad_area.0)).0
    } else {
        0.0
    };

    let caliper_stress = Megapascals::from(Pascals(total_clamp_force / CALIPER_SECTION_M2)).0;
    let safety_factor =
        Measure::ratio_or_infinite(input.caliper_material_yield_strength, caliper_stress);

    CaliperResult {
        total_clamp_force_n: total_clamp_force,
        clamp_force_per_piston_n: clamp_force_per_piston,
        piston_diameter_mm: Millimetres::from(piston_diameter).0,
        brake_torque_delivered_nm: brake_torque_delivered,
        pad_pressure_mpa: pad_pressure,
        caliper_stress_mpa: caliper_stress,
        safety_factor,
    }
}

impl ToReport for CaliperResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::Caliper)
            .number("total_clamp_force", "Total clamp force", self.total_clamp_force_n, 2, "N")
            .number(
                "clamp_force_per_piston",
                "Clamp force per piston",
                self.clamp_force_per_piston_n,
                2,
                "N",
            )
            .number("piston_diameter", "Piston diameter", self.piston_diameter_mm, 2, "mm")
            .number(
                "brake_torque_delivered",
                "Brake torque delivered",
                self.brake_torque_delivered_nm,
                2,
                "Nm",
            )
            .number("pad_pressure", "Pad contact pressure", self.pad_pressure_mpa, 2, "MPa")
            .number("caliper_stress", "Caliper stress", self.caliper_stress_mpa, 2, "MPa")
            .measure("safety_factor", "Safety factor", self.safety_factor, 2, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_caliper() -> CaliperInput {
        CaliperInput {
            required_braking_torque: 800.0,
            number_of_pistons: 4,
            hydraulic_pressure: 10.0,
            pad_contact_area: 25.0,
            number_of_discs: 2,
            caliper_material_yield_strength: 250.0,
            disc_effective_radius: 0.125,
            friction_coefficient: 0.4,
        }
    }

    #[test]
    fn test_clamp_force() {
        let result = calculate(&test_caliper());
        // 800 / (0.4 · 0.125 · 2 · 2) = 4000 N
        assert!((result.total_clamp_force_n - 4000.0).abs() < 1e-9);
        assert!((result.clamp_force_per_piston_n - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_piston_diameter() {
        let result = calculate(&test_caliper());
        // A = 1000 N / 10 MPa = 100 mm², d = 2√(100/π)
        let expected = 2.0 * (100.0 / PI).sqrt();
        assert!((result.piston_diameter_mm - expected).abs() < 1e-9);
    }

    #[test]
    fn test_delivered_torque_matches_requirement() {
        let result = calculate(&test_caliper());
        assert!((result.brake_torque_delivered_nm - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_stress_and_safety() {
        let result = calculate(&test_caliper());
        // 4000 N over 0.001 m² = 4 MPa
        assert!((result.caliper_stress_mpa - 4.0).abs() < 1e-9);
        assert!((result.safety_factor.value().unwrap() - 62.5).abs() < 1e-9);
        // 4000 N over 25 cm²
        assert!((result.pad_pressure_mpa - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_zero_torque_gives_infinite_safety() {
        let mut caliper = test_caliper();
        caliper.required_braking_torque = 0.0;
        let result = calculate(&caliper);
        assert!(result.safety_factor.is_infinite());
        assert_eq!(result.to_report().text_of("safety_factor"), Some("Infinite"));
    }

    #[test]
    fn test_zero_pistons_is_reported_not_panicking() {
        let mut caliper = test_caliper();
        caliper.number_of_pistons = 0;
        let report = calculate(&caliper).to_report();
        assert_eq!(report.text_of("clamp_force_per_piston"), Some("Infinite"));
        assert_eq!(report.text_of("piston_diameter"), Some("Infinite"));
    }
}
