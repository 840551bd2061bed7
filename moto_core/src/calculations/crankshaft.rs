//! # Crankshaft Sizing
//!
//! Centre-crank sizing at top dead centre: the crankpin is treated as a
//! simply supported beam between the main bearings, loaded by the peak gas
//! force, then checked for projected bearing pressure. Main journal and web
//! proportions follow from the crankpin diameter.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{Megapascals, Metres, Millimetres, Pascals};

/// Main journal diameter relative to the crankpin
pub const JOURNAL_DIAMETER_RATIO: f64 = 1.15;

/// Web thickness relative to the crankpin diameter
pub const WEB_THICKNESS_RATIO: f64 = 0.5;

/// Web width relative to the crankpin diameter
pub const WEB_WIDTH_RATIO: f64 = 1.25;

/// Input parameters for crankshaft sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrankshaftInput {
    /// mm
    pub piston_diameter: f64,
    /// MPa
    pub max_combustion_pressure: f64,
    /// Distance between main bearings (mm)
    pub cylinder_bore_spacing: f64,
    /// MPa
    pub crankshaft_material_yield_strength: f64,
    /// MPa
    pub allowable_bearing_pressure: f64,
    pub safety_factor: f64,
}

impl InputSchema for CrankshaftInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("piston_diameter", "Piston diameter", "mm", "80"),
        FieldSpec::float("max_combustion_pressure", "Max combustion pressure", "MPa", "6"),
        FieldSpec::float("cylinder_bore_spacing", "Bearing spacing", "mm", "100"),
        FieldSpec::float(
            "crankshaft_material_yield_strength",
            "Crankshaft yield strength",
            "MPa",
            "700",
        ),
        FieldSpec::float("allowable_bearing_pressure", "Allowable bearing pressure", "MPa", "10"),
        FieldSpec::float("safety_factor", "Safety factor", "", "3"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        CrankshaftInput {
            piston_diameter: r.float("piston_diameter"),
            max_combustion_pressure: r.float("max_combustion_pressure"),
            cylinder_bore_spacing: r.float("cylinder_bore_spacing"),
            crankshaft_material_yield_strength: r.float("crankshaft_material_yield_strength"),
            allowable_bearing_pressure: r.float("allowable_bearing_pressure"),
            safety_factor: r.float("safety_factor"),
        }
    }
}

/// Results from crankshaft sizing. All dimensions in mm.
///
/// A negative bending moment has no real crankpin diameter, so every
/// dimension derived from it is `Invalid` as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrankshaftResult {
    pub crankpin_diameter: Measure,
    pub crankpin_length: Measure,
    pub main_journal_diameter: Measure,
    pub main_journal_length: Measure,
    pub crank_web_thickness: Measure,
    pub crank_web_width: Measure,
}

fn to_mm(metres: Measure) -> Measure {
    metres.map(|m| Millimetres::from(Metres(m)).0)
}

/// Size a crankshaft.
pub fn calculate(input: &CrankshaftInput) -> CrankshaftResult {
    // Piston diameter in mm and pressure in MPa give the force in N
    let max_gas_force = input.max_combustion_pressure * (PI * input.piston_diameter.powi(2) / 4.0);
    let allowable_bending_stress: Pascals =
        Megapascals(input.crankshaft_material_yield_strength / input.safety_factor).into();
    let bearing_pressure: Pascals = Megapascals(input.allowable_bearing_pressure).into();
    let span: Metres = Millimetres(input.cylinder_bore_spacing).into();

    let bending_moment = max_gas_force * span.0 / 2.0;
    let crankpin_diameter =
        Measure::cube_root((32.0 * bending_moment) / (PI * allowable_bending_stress.0));

    // Same projected area for pin and journal
    let projected_area = max_gas_force / bearing_pressure.0;
    let crankpin_length = crankpin_diameter.map(|d| projected_area / d);
    let main_journal_diameter = crankpin_diameter.map(|d| JOURNAL_DIAMETER_RATIO * d);
    let main_journal_length = main_journal_diameter.map(|d| projected_area / d);

    CrankshaftResult {
        crankpin_diameter: to_mm(crankpin_diameter),
        crankpin_length: to_mm(crankpin_length),
        main_journal_diameter: to_mm(main_journal_diameter),
        main_journal_length: to_mm(main_journal_length),
        crank_web_thickness: to_mm(crankpin_diameter.map(|d| WEB_THICKNESS_RATIO * d)),
        crank_web_width: to_mm(crankpin_diameter.map(|d| WEB_WIDTH_RATIO * d)),
    }
}

impl ToReport for CrankshaftResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::Crankshaft)
            .measure("crankpin_diameter", "Crankpin diameter", self.crankpin_diameter, 2, "mm")
            .measure("crankpin_length", "Crankpin length", self.crankpin_length, 2, "mm")
            .measure(
                "main_journal_diameter",
                "Main journal diameter",
                self.main_journal_diameter,
                2,
                "mm",
            )
            .measure(
                "main_journal_length",
                "Main journal length",
                self.main_journal_length,
                2,
                "mm",
            )
            .measure(
                "crank_web_thickness",
                "Crank web thickness",
                self.crank_web_thickness,
                2,
                "mm",
            )
            .measure("crank_web_width", "Crank web width", self.crank_web_width, 2, "mm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_crank() -> CrankshaftInput {
        CrankshaftInput {
            piston_diameter: 80.0,
            max_combustion_pressure: 6.0,
            cylinder_bore_spacing: 100.0,
            crankshaft_material_yield_strength: 700.0,
            allowable_bearing_pressure: 10.0,
            safety_factor: 3.0,
        }
    }

    fn gas_force() -> f64 {
        6.0 * PI * 6400.0 / 4.0
    }

    #[test]
    fn test_crankpin_diameter() {
        let result = calculate(&test_crank());
        let moment = gas_force() * 0.1 / 2.0;
        let d = (32.0 * moment / (PI * (700.0 / 3.0) * 1e6)).cbrt() * 1000.0;
        assert!((result.crankpin_diameter.value().unwrap() - d).abs() < 1e-9);
    }

    #[test]
    fn test_projected_bearing_area() {
        let result = calculate(&test_crank());
        // length · diameter (mm²) equals F / p for both pin and journal
        let area_mm2 = gas_force() / 10.0;
        let pin_length = result.crankpin_length.value().unwrap();
        let pin = pin_length * result.crankpin_diameter.value().unwrap();
        let journal_length = result.main_journal_length.value().unwrap();
        let journal = journal_length * result.main_journal_diameter.value().unwrap();
        assert!((pin - area_mm2).abs() < 1e-6);
        assert!((journal - area_mm2).abs() < 1e-6);
    }

    #[test]
    fn test_proportions() {
        let result = calculate(&test_crank());
        let d = result.crankpin_diameter.value().unwrap();
        assert!((result.main_journal_diameter.value().unwrap() - 1.15 * d).abs() < 1e-9);
        assert!((result.crank_web_thickness.value().unwrap() - 0.5 * d).abs() < 1e-9);
        assert!((result.crank_web_width.value().unwrap() - 1.25 * d).abs() < 1e-9);
    }

    #[test]
    fn test_zero_pressure_report_is_defined() {
        let mut crank = test_crank();
        crank.max_combustion_pressure = 0.0;
        let report = calculate(&crank).to_report();
        assert_eq!(report.text_of("crankpin_diameter"), Some("0.00 mm"));
        // 0 / 0 length
        assert_eq!(report.text_of("crankpin_length"), Some("Invalid"));
    }

    #[test]
    fn test_negative_moment_has_no_real_crankpin() {
        let mut crank = test_crank();
        crank.max_combustion_pressure = -6.0;
        let result = calculate(&crank);
        assert!(result.crankpin_diameter.is_invalid());
        assert!(result.main_journal_diameter.is_invalid());
        assert!(result.crank_web_width.is_invalid());

        let report = result.to_report();
        for row in &report.rows {
            assert_eq!(row.value.as_text(), Some("Invalid"), "{}", row.key);
        }
    }
}
