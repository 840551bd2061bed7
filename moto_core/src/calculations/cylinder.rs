//! # Cylinder Sizing
//!
//! Thin-wall hoop stress sizing of the cylinder barrel plus a reboring
//! allowance, with flange proportions derived from the wall thickness.

use serde::{Deserialize, Serialize};

use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;

/// Extra wall kept for reboring oversize (mm)
pub const REBORING_ALLOWANCE_MM: f64 = 1.5;

pub const FIN_NOTE: &str = "For air-cooled engines, fins are required. Typical dimensions are: \
Thickness (1.5-3mm), Height (25-50mm), and Spacing (2-5mm). Their final design requires detailed \
heat transfer analysis.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderInput {
    /// mm
    pub cylinder_bore_diameter: f64,
    /// mm
    pub stroke_length: f64,
    /// MPa
    pub max_combustion_pressure: f64,
    /// MPa
    pub cylinder_material_strength: f64,
    pub safety_factor: f64,
}

impl InputSchema for CylinderInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("cylinder_bore_diameter", "Bore diameter", "mm", "80"),
        FieldSpec::float("stroke_length", "Stroke length", "mm", "70"),
        FieldSpec::float("max_combustion_pressure", "Max combustion pressure", "MPa", "6"),
        FieldSpec::float("cylinder_material_strength", "Cylinder material strength", "MPa", "250"),
        FieldSpec::float("safety_factor", "Safety factor", "", "5"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        CylinderInput {
            cylinder_bore_diameter: r.float("cylinder_bore_diameter"),
            stroke_length: r.float("stroke_length"),
            max_combustion_pressure: r.float("max_combustion_pressure"),
            cylinder_material_strength: r.float("cylinder_material_strength"),
            safety_factor: r.float("safety_factor"),
        }
    }
}

/// Results from cylinder sizing. Lengths in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderResult {
    pub wall_thickness: f64,
    pub outer_diameter: f64,
    pub length: f64,
    pub flange_diameter: f64,
    pub flange_thickness: f64,
}

pub fn calculate(input: &CylinderInput) -> CylinderResult {
    let allowable_stress = input.cylinder_material_strength / input.safety_factor;
    let wall = (input.max_combustion_pressure * input.cylinder_bore_diameter)
        / (2.0 * allowable_stress)
        + REBORING_ALLOWANCE_MM;
    let outer = input.cylinder_bore_diameter + 2.0 * wall;

    CylinderResult {
        wall_thickness: wall,
        outer_diameter: outer,
        length: 1.15 * input.stroke_length,
        flange_diameter: 1.5 * outer,
        flange_thickness: 1.3 * wall,
    }
}

impl ToReport for CylinderResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::Cylinder)
            .number("cylinder_wall_thickness", "Wall thickness", self.wall_thickness, 2, "mm")
            .number("outer_cylinder_diameter", "Outer diameter", self.outer_diameter, 2, "mm")
            .number("cylinder_length", "Cylinder length", self.length, 2, "mm")
            .number("cylinder_flange_diameter", "Flange diameter", self.flange_diameter, 2, "mm")
            .number("cylinder_flange_thickness", "Flange thickness", self.flange_thickness, 2, "mm")
            .text("fin_note", "Cooling fins", FIN_NOTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cylinder() -> CylinderInput {
        CylinderInput {
            cylinder_bore_diameter: 80.0,
            stroke_length: 70.0,
            max_combustion_pressure: 6.0,
            cylinder_material_strength: 250.0,
            safety_factor: 5.0,
        }
    }

    #[test]
    fn test_wall_thickness() {
        let result = calculate(&test_cylinder());
        // 6·80 / (2·50) + 1.5
        assert!((result.wall_thickness - 6.3).abs() < 1e-9);
        assert!((result.outer_diameter - 92.6).abs() < 1e-9);
    }

    #[test]
    fn test_proportions() {
        let result = calculate(&test_cylinder());
        assert!((result.length - 80.5).abs() < 1e-9);
        assert!((result.flange_thickness - 8.19).abs() < 1e-9);
        assert!((result.flange_diameter - 138.9).abs() < 1e-9);
    }

    #[test]
    fn test_report() {
        let report = calculate(&test_cylinder()).to_report();
        assert_eq!(report.text_of("cylinder_wall_thickness"), Some("6.30 mm"));
        assert_eq!(report.text_of("cylinder_length"), Some("80.50 mm"));
        assert!(report.text_of("fin_note").unwrap().starts_with("For air-cooled engines"));
    }

    #[test]
    fn test_zero_safety_factor() {
        let mut cylinder = test_cylinder();
        cylinder.safety_factor = 0.0;
        // Allowable stress is infinite, so only the reboring allowance remains
        let result = calculate(&cylinder);
        assert!((result.wall_thickness - 1.5).abs() < 1e-12);
    }
}
