//! # Clutch Sizing
//!
//! Single plate dry clutch under the uniform wear assumption: the friction
//! plate has an inner diameter of 0.6 × outer and transmits torque on both
//! faces at the mean radius (D_o + D_i) / 4.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::calculations::clutch::{ClutchInput, calculate};
//!
//! let input = ClutchInput {
//!     max_engine_torque: 60.0,
//!     outer_diameter: 140.0,
//!     friction_coefficient: 0.35,
//!     allowable_surface_pressure: 0.25,
//!     safety_factor: 1.3,
//! };
//! assert!(calculate(&input).viable);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{Megapascals, Metres, Millimetres, Pascals};

pub const CLUTCH_TYPE: &str = "Single Plate Dry Clutch";

/// Inner diameter relative to outer
pub const INNER_DIAMETER_RATIO: f64 = 0.6;

/// Friction faces on a single plate
pub const FRICTION_FACES: f64 = 2.0;

/// Input parameters for clutch sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClutchInput {
    /// Nm
    pub max_engine_torque: f64,
    /// Friction plate outer diameter (mm)
    pub outer_diameter: f64,
    pub friction_coefficient: f64,
    /// MPa
    pub allowable_surface_pressure: f64,
    pub safety_factor: f64,
}

impl InputSchema for ClutchInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("max_engine_torque", "Max engine torque", "Nm", "60"),
        FieldSpec::float("outer_diameter", "Plate outer diameter", "mm", "140"),
        FieldSpec::float("friction_coefficient", "Friction coefficient", "", "0.35"),
        FieldSpec::float("allowable_surface_pressure", "Allowable surface pressure", "MPa", "0.25"),
        FieldSpec::float("safety_factor", "Safety factor", "", "1.3"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        ClutchInput {
            max_engine_torque: r.float("max_engine_torque"),
            outer_diameter: r.float("outer_diameter"),
            friction_coefficient: r.float("friction_coefficient"),
            allowable_surface_pressure: r.float("allowable_surface_pressure"),
            safety_factor: r.float("safety_factor"),
        }
    }
}

/// Results from clutch sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClutchResult {
    /// Design torque (Nm)
    pub torque_capacity_nm: f64,
    pub inner_diameter_mm: f64,
    pub mean_radius_mm: f64,
    pub clamping_force_n: f64,
    pub surface_pressure_mpa: f64,
    /// Surface pressure within the allowable limit
    pub viable: bool,
}

impl ClutchResult {
    pub fn viability_class(&self) -> &'static str {
        if self.viable {
            "viable"
        } else {
            "not-viable"
        }
    }

    pub fn viability_note(&self) -> &'static str {
        if self.viable {
            "Design is viable. Surface pressure is within allowable limits."
        } else {
            "Design NOT viable. Surface pressure exceeds limits. \
             Increase outer diameter or check parameters."
        }
    }
}

/// Size a clutch.
pub fn calculate(input: &ClutchInput) -> ClutchResult {
    let torque_capacity = input.max_engine_torque * input.safety_factor;

    let outer: Metres = Millimetres(input.outer_diameter).into();
    let inner = outer * INNER_DIAMETER_RATIO;
    let mean_radius = (outer + inner) / 4.0;

    let clamping_force =
        torque_capacity / (FRICTION_FACES * input.friction_coefficient * mean_radius.0);
    let face_area = (PI / 4.0) * (outer.0.powi(2) - inner.0.powi(2));
    let surface_pressure = Megapascals::from(Pascals(clamping_force / face_area));

    ClutchResult {
        torque_capacity_nm: torque_capacity,
        inner_diameter_mm: Millimetres::from(inner).0,
        mean_radius_mm: Millimetres::from(mean_radius).0,
        clamping_force_n: clamping_force,
        surface_pressure_mpa: surface_pressure.0,
        // NaN pressure compares false and is therefore not viable
        viable: surface_pressure.0 <= input.allowable_surface_pressure,
    }
}

impl ToReport for ClutchResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::Clutch)
            .text("clutch_type", "Clutch type", CLUTCH_TYPE)
            .number("torque_capacity", "Torque capacity", self.torque_capacity_nm, 2, "Nm")
            .number("inner_diameter", "Inner diameter", self.inner_diameter_mm, 2, "mm")
            .number("mean_radius", "Mean radius", self.mean_radius_mm, 2, "mm")
            .number(
                "required_clamping_force",
                "Required clamping force",
                self.clamping_force_n,
                2,
                "N",
            )
            .number(
                "actual_surface_pressure",
                "Actual surface pressure",
                self.surface_pressure_mpa,
                3,
                "MPa",
            )
            .text("viability_note", "Viability", self.viability_note())
            .text("viability_class", "Class", self.viability_class())
    }
}
