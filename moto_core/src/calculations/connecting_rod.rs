//! # Connecting Rod Sizing
//!
//! I-section shank sized for buckling-free compression under peak gas load,
//! big-end cap bolts sized for the reciprocating inertia load at maximum
//! rpm, and eye wall thicknesses proportioned from the pin diameters.
//!
//! The standard I-section has flange width 4t, depth 5t and area 11t², where
//! t is the web and flange thickness.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{Metres, Millimetres, RadiansPerSecond, Rpm};

/// I-section area in units of t²
pub const I_SECTION_AREA_FACTOR: f64 = 11.0;

/// Small-end section relative to big-end section
pub const SHANK_TAPER_RATIO: f64 = 0.8;

/// Eye wall thickness per mm of bore
pub const EYE_WALL_RATIO: f64 = 0.35;

/// Thread core diameter relative to nominal
pub const BOLT_CORE_RATIO: f64 = 0.85;

/// Input parameters for connecting rod sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectingRodInput {
    /// mm
    pub piston_diameter: f64,
    /// MPa
    pub max_combustion_pressure: f64,
    /// Piston, pin and small-end mass (kg)
    pub reciprocating_mass: f64,
    /// mm
    pub crank_radius: f64,
    /// mm
    pub piston_pin_diameter: f64,
    /// mm
    pub crankpin_diameter: f64,
    pub max_engine_rpm: f64,
    /// MPa
    pub rod_material_yield_strength: f64,
    /// MPa
    pub bolt_material_yield_strength: f64,
    pub safety_factor: f64,
}

impl InputSchema for ConnectingRodInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("piston_diameter", "Piston diameter", "mm", "80"),
        FieldSpec::float("max_combustion_pressure", "Max combustion pressure", "MPa", "6"),
        FieldSpec::float("reciprocating_mass", "Reciprocating mass", "kg", "0.4"),
        FieldSpec::float("crank_radius", "Crank radius", "mm", "35"),
        FieldSpec::float("piston_pin_diameter", "Piston pin diameter", "mm", "20"),
        FieldSpec::float("crankpin_diameter", "Crankpin diameter", "mm", "40"),
        FieldSpec::float("max_engine_rpm", "Max engine speed", "rpm", "10000"),
        FieldSpec::float("rod_material_yield_strength", "Rod yield strength", "MPa", "600"),
        FieldSpec::float("bolt_material_yield_strength", "Bolt yield strength", "MPa", "900"),
        FieldSpec::float("safety_factor", "Safety factor", "", "3"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        ConnectingRodInput {
            piston_diameter: r.float("piston_diameter"),
            max_combustion_pressure: r.float("max_combustion_pressure"),
            reciprocating_mass: r.float("reciprocating_mass"),
            crank_radius: r.float("crank_radius"),
            piston_pin_diameter: r.float("piston_pin_diameter"),
            crankpin_diameter: r.float("crankpin_diameter"),
            max_engine_rpm: r.float("max_engine_rpm"),
            rod_material_yield_strength: r.float("rod_material_yield_strength"),
            bolt_material_yield_strength: r.float("bolt_material_yield_strength"),
            safety_factor: r.float("safety_factor"),
        }
    }
}

/// Results from connecting rod sizing. All dimensions in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectingRodResult {
    pub big_end_shank_height: f64,
    pub big_end_flange_width: f64,
    pub small_end_shank_height: f64,
    pub small_end_flange_width: f64,
    pub web_and_flange_thickness: f64,
    pub bolt_diameter: f64,
    pub small_end_outer_diameter: f64,
    pub small_end_wall_thickness: f64,
    pub big_end_outer_diameter: f64,
    pub big_end_wall_thickness: f64,
    /// Peak reciprocating inertia force (N)
    pub max_inertial_force_n: f64,
}

/// Size a connecting rod.
pub fn calculate(input: &ConnectingRodInput) -> ConnectingRodResult {
    // Shank
    let max_gas_force = input.max_combustion_pressure * (PI * input.piston_diameter.powi(2) / 4.0);
    let allowable_compressive_stress = input.rod_material_yield_strength / input.safety_factor;
    let shank_area = max_gas_force / allowable_compressive_stress;
    let t = (shank_area / I_SECTION_AREA_FACTOR).sqrt();
    let big_end_shank_height = 5.0 * t;
    let big_end_flange_width = 4.0 * t;

    // Cap bolts (two per rod)
    let omega: RadiansPerSecond = Rpm(input.max_engine_rpm).into();
    let crank_radius: Metres = Millimetres(input.crank_radius).into();
    let max_inertial_force = input.reciprocating_mass * crank_radius.0 * omega.0.powi(2);
    let force_per_bolt = max_inertial_force / 2.0;
    let allowable_bolt_stress = input.bolt_material_yield_strength / input.safety_factor;
    let required_bolt_core_area = force_per_bolt / allowable_bolt_stress;
    let bolt_core_diameter = (4.0 * required_bolt_core_area / PI).sqrt();

    // Eyes
    let small_end_wall = input.piston_pin_diameter * EYE_WALL_RATIO;
    let big_end_wall = input.crankpin_diameter * EYE_WALL_RATIO;

    ConnectingRodResult {
        big_end_shank_height,
        big_end_flange_width,
        small_end_shank_height: big_end_shank_height * SHANK_TAPER_RATIO,
        small_end_flange_width: big_end_flange_width * SHANK_TAPER_RATIO,
        web_and_flange_thickness: t,
        bolt_diameter: bolt_core_diameter / BOLT_CORE_RATIO,
        small_end_outer_diameter: input.piston_pin_diameter + 2.0 * small_end_wall,
        small_end_wall_thickness: small_end_wall,
        big_end_outer_diameter: input.crankpin_diameter + 2.0 * big_end_wall,
        big_end_wall_thickness: big_end_wall,
        max_inertial_force_n: max_inertial_force,
    }
}

impl ToReport for ConnectingRodResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::ConnectingRod)
            .number(
                "big_end_shank_height",
                "Big end shank height",
                self.big_end_shank_height,
                2,
                "mm",
            )
            .number(
                "big_end_flange_width",
                "Big end flange width",
                self.big_end_flange_width,
                2,
                "mm",
            )
            .number(
                "small_end_shank_height",
                "Small end shank height",
                self.small_end_shank_height,
                2,
                "mm",
            )
            .number(
                "small_end_flange_width",
                "Small end flange width",
                self.small_end_flange_width,
                2,
                "mm",
            )
            .number(
                "web_and_flange_thickness",
                "Web and flange thickness",
                self.web_and_flange_thickness,
                2,
                "mm",
            )
            .number("bolt_diameter", "Bolt diameter", self.bolt_diameter, 2, "mm")
            .number(
                "small_end_outer_diameter",
                "Small end OD",
                self.small_end_outer_diameter,
                2,
                "mm",
            )
            .number(
                "small_end_wall_thickness",
                "Small end wall",
                self.small_end_wall_thickness,
                2,
                "mm",
            )
            .number("big_end_outer_diameter", "Big end OD", self.big_end_outer_diameter, 2, "mm")
            .number("big_end_wall_thickness", "Big end wall", self.big_end_wall_thickness, 2, "mm")
            .number("max_inertial_force", "Max inertial force", self.max_inertial_force_n, 2, "N")
    }
}
