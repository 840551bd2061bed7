//! # Piston Sizing
//!
//! Derives piston geometry from bore, stroke and the peak combustion
//! pressure: running clearance, crown thickness (flat plate, Grashof),
//! gudgeon pin diameters and skirt length from side thrust.
//!
//! All lengths are in mm and pressures in MPa, so forces come out in N
//! (MPa·mm² = N) and no SI round trip is needed.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::calculations::piston::{PistonInput, calculate};
//!
//! let input = PistonInput {
//!     cylinder_bore: 80.0,
//!     stroke_length: 70.0,
//!     connecting_rod_length: 120.0,
//!     deck_height: 190.0,
//!     max_combustion_pressure: 6.0,
//!     piston_material_strength: 200.0,
//!     safety_factor: 2.0,
//! };
//! let result = calculate(&input);
//! assert!((result.piston_clearance_mm - 0.06).abs() < 1e-12);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;

/// Diametral running clearance per mm of bore
pub const CLEARANCE_PER_BORE: f64 = 0.00075;

/// Gudgeon pin outer diameter as a fraction of bore
pub const PIN_DIAMETER_RATIO: f64 = 0.25;

/// Allowable skirt bearing pressure (MPa)
pub const SKIRT_BEARING_PRESSURE_MPA: f64 = 0.7;

/// Input parameters for piston sizing. Lengths in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PistonInput {
    pub cylinder_bore: f64,
    pub stroke_length: f64,
    /// Centre-to-centre rod length
    pub connecting_rod_length: f64,
    /// Crank centreline to deck
    pub deck_height: f64,
    /// MPa
    pub max_combustion_pressure: f64,
    /// MPa
    pub piston_material_strength: f64,
    pub safety_factor: f64,
}

impl InputSchema for PistonInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("cylinder_bore", "Cylinder bore", "mm", "80"),
        FieldSpec::float("stroke_length", "Stroke length", "mm", "70"),
        FieldSpec::float("connecting_rod_length", "Connecting rod length", "mm", "120"),
        FieldSpec::float("deck_height", "Deck height", "mm", "190"),
        FieldSpec::float("max_combustion_pressure", "Max combustion pressure", "MPa", "6"),
        FieldSpec::float("piston_material_strength", "Piston material strength", "MPa", "200"),
        FieldSpec::float("safety_factor", "Safety factor", "", "2"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        PistonInput {
            cylinder_bore: r.float("cylinder_bore"),
            stroke_length: r.float("stroke_length"),
            connecting_rod_length: r.float("connecting_rod_length"),
            deck_height: r.float("deck_height"),
            max_combustion_pressure: r.float("max_combustion_pressure"),
            piston_material_strength: r.float("piston_material_strength"),
            safety_factor: r.float("safety_factor"),
        }
    }
}

/// Results from piston sizing. Lengths in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PistonResult {
    pub piston_diameter_mm: f64,
    pub piston_clearance_mm: f64,
    pub compression_height_mm: f64,
    pub crown_thickness_mm: Measure,
    /// Gas force on the crown (N)
    pub max_piston_force_n: f64,
    pub gudgeon_pin_outer_diameter_mm: f64,
    /// `Invalid` when a solid pin of this diameter is still too weak
    pub gudgeon_pin_inner_diameter_mm: Measure,
    /// `Invalid` when half the stroke exceeds the rod length
    pub piston_skirt_length_mm: Measure,
}

/// Size a piston.
pub fn calculate(input: &PistonInput) -> PistonResult {
    let bore = input.cylinder_bore;
    let pressure = input.max_combustion_pressure;

    let piston_clearance = CLEARANCE_PER_BORE * bore;
    let piston_diameter = bore - piston_clearance;
    let compression_height =
        input.deck_height - input.stroke_length / 2.0 - input.connecting_rod_length;

    let allowable_stress = input.piston_material_strength / input.safety_factor;
    let crown_radicand = (3.0 * pressure * bore.powi(2)) / (16.0 * allowable_stress);
    let crown_thickness = Measure::from_f64(crown_radicand).map(f64::sqrt);

    let max_piston_force = pressure * (PI * bore.powi(2) / 4.0);

    // Hollow pin: Z = π (D⁴ - d⁴) / (32 D)  =>  d = (D⁴ - 32 Z D / π)^¼
    let pin_outer = PIN_DIAMETER_RATIO * bore;
    let bending_moment = max_piston_force * bore / 8.0;
    let required_section_modulus = bending_moment / allowable_stress;
    let radicand = pin_outer.powi(4) - (32.0 * required_section_modulus * pin_outer) / PI;
    let pin_inner = if radicand.is_nan() {
        Measure::Invalid
    } else {
        Measure::fourth_root(radicand)
    };

    let max_rod_angle = ((input.stroke_length / 2.0) / input.connecting_rod_length).asin();
    let max_thrust = max_piston_force * max_rod_angle.tan();
    let skirt_area = max_thrust / SKIRT_BEARING_PRESSURE_MPA;
    let skirt_length = Measure::from_f64(skirt_area / bore);

    PistonResult {
        piston_diameter_mm: piston_diameter,
        piston_clearance_mm: piston_clearance,
        compression_height_mm: compression_height,
        crown_thickness_mm: crown_thickness,
        max_piston_force_n: max_piston_force,
        gudgeon_pin_outer_diameter_mm: pin_outer,
        gudgeon_pin_inner_diameter_mm: pin_inner,
        piston_skirt_length_mm: skirt_length,
    }
}

impl ToReport for PistonResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::Piston)
            .number("piston_diameter", "Piston diameter", self.piston_diameter_mm, 2, "mm")
            .number("piston_clearance", "Piston clearance", self.piston_clearance_mm, 4, "mm")
            .number("compression_height", "Compression height", self.compression_height_mm, 2, "mm")
            .measure("crown_thickness", "Crown thickness", self.crown_thickness_mm, 2, "mm")
            .number("max_piston_force", "Max piston force", self.max_piston_force_n, 2, "N")
            .number(
                "gudgeon_pin_outer_diameter",
                "Gudgeon pin OD",
                self.gudgeon_pin_outer_diameter_mm,
                2,
                "mm",
            )
            .measure(
                "gudgeon_pin_inner_diameter",
                "Gudgeon pin ID",
                self.gudgeon_pin_inner_diameter_mm,
                2,
                "mm",
            )
            .measure(
                "piston_skirt_length",
                "Piston skirt length",
                self.piston_skirt_length_mm,
                2,
                "mm",
            )
    }
}
