//! # Tyre Geometry
//!
//! Derives the main tyre dimensions from the size designation
//! (section width / aspect ratio / rim diameter) and estimates the static
//! contact patch.
//!
//! ## Assumptions
//!
//! - Mass split evenly between front and rear
//! - Inflation pressure 2.25 bar, patch area = load / pressure
//! - Sidewall thickness 8% of section height, crown radius 1.7 × width

use serde::{Deserialize, Serialize};

use crate::reference::BikeType;
use crate::report::{Report, ToReport};
use crate::schema::{Choice, FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{Inches, Millimetres, STANDARD_GRAVITY};

/// Assumed inflation pressure (Pa)
pub const INFLATION_PRESSURE_PA: f64 = 225_000.0;

/// Standard motorcycle bead size (mm)
pub const BEAD_SIZE_MM: f64 = 17.5;

/// Input parameters for tyre sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TyreInput {
    pub bike_type: BikeType,
    /// Laden mass (kg)
    pub vehicle_mass: f64,
    /// Rim diameter (in)
    pub rim_diameter: f64,
    /// Section height as a percentage of width
    pub aspect_ratio: f64,
    /// Section width (mm)
    pub section_width: f64,
}

impl InputSchema for TyreInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::choice("bike_type", "Bike type", BikeType::OPTIONS, "sports"),
        FieldSpec::float("vehicle_mass", "Vehicle mass", "kg", "260"),
        FieldSpec::float("rim_diameter", "Rim diameter", "in", "17"),
        FieldSpec::float("aspect_ratio", "Aspect ratio", "%", "55"),
        FieldSpec::float("section_width", "Section width", "mm", "180"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        TyreInput {
            bike_type: r.choice("bike_type"),
            vehicle_mass: r.float("vehicle_mass"),
            rim_diameter: r.float("rim_diameter"),
            aspect_ratio: r.float("aspect_ratio"),
            section_width: r.float("section_width"),
        }
    }
}

/// Results from tyre sizing. Lengths in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TyreResult {
    pub section_height_mm: f64,
    pub overall_diameter_mm: f64,
    pub tread_thickness_mm: f64,
    pub sidewall_thickness_mm: f64,
    pub bead_size_mm: f64,
    pub crown_radius_mm: f64,
    /// Static contact patch (m²)
    pub contact_patch_area_m2: f64,
}

/// Size a tyre.
pub fn calculate(input: &TyreInput) -> TyreResult {
    let section_height = (input.aspect_ratio / 100.0) * input.section_width;
    let rim = Millimetres::from(Inches(input.rim_diameter));
    let overall_diameter = 2.0 * section_height + rim.0;

    let load_per_tyre = input.vehicle_mass * STANDARD_GRAVITY / 2.0;

    TyreResult {
        section_height_mm: section_height,
        overall_diameter_mm: overall_diameter,
        tread_thickness_mm: input.bike_type.tread_thickness_mm(),
        sidewall_thickness_mm: 0.08 * section_height,
        bead_size_mm: BEAD_SIZE_MM,
        crown_radius_mm: 1.7 * input.section_width,
        contact_patch_area_m2: load_per_tyre / INFLATION_PRESSURE_PA,
    }
}

impl ToReport for TyreResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::Tyre)
            .number("section_height", "Section height", self.section_height_mm, 2, "mm")
            .number("overall_diameter", "Overall diameter", self.overall_diameter_mm, 2, "mm")
            .number("tread_thickness", "Tread thickness", self.tread_thickness_mm, 2, "mm")
            .number("sidewall_thickness", "Sidewall thickness", self.sidewall_thickness_mm, 2, "mm")
            .number("bead_size", "Bead size", self.bead_size_mm, 2, "mm")
            .number("crown_radius", "Crown radius", self.crown_radius_mm, 2, "mm")
            .number("contact_patch_area", "Contact patch area", self.contact_patch_area_m2, 4, "m²")
    }
}
