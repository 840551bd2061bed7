//! # Brake Disc Sizing
//!
//! Sizes a solid front brake disc from the stopping requirement and checks
//! it thermally (single-stop temperature rise) and for stress.
//!
//! ## Assumptions
//!
//! - Constant deceleration over the stopping distance
//! - Inner diameter fixed at 0.6 × outer diameter
//! - All kinetic energy goes into the disc in one stop
//! - One disc clamped by two pads; stress check is a simplified annulus model
//!
//! ## Example
//!
//! ```rust
//! use moto_core::calculations::disc::{DiscInput, calculate};
//!
//! let input = DiscInput {
//!     mass_vehicle: 180.0,
//!     mass_rider: 80.0,
//!     initial_velocity: 60.0,
//!     stopping_distance: 20.0,
//!     wheel_radius: 0.3,
//!     friction_coefficient: 0.4,
//!     caliper_piston_area: 4.0,
//!     hydraulic_pressure: 10.0,
//!     number_of_discs: 1,
//!     material_density: 7200.0,
//!     material_specific_heat: 500.0,
//!     material_yield_strength: 300.0,
//!     max_outer_diameter: 280.0,
//!     initial_disc_thickness: 5.0,
//! };
//!
//! let result = calculate(&input);
//! assert!((result.braking_force_n - 1805.56).abs() < 0.01);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{
    KilometresPerHour, Megapascals, Metres, MetresPerSecond, Millimetres, Pascals,
    SquareCentimetres, SquareMetres,
};

/// Inner diameter as a fraction of the outer diameter
pub const INNER_DIAMETER_RATIO: f64 = 0.6;

/// Minimum service thickness as a fraction of new thickness (20% wear)
pub const MIN_SERVICE_THICKNESS_RATIO: f64 = 0.8;

/// Input parameters for disc sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass_vehicle": 180.0,
///   "mass_rider": 80.0,
///   "initial_velocity": 60.0,
///   "stopping_distance": 20.0,
///   "wheel_radius": 0.3,
///   "friction_coefficient": 0.4,
///   "caliper_piston_area": 4.0,
///   "hydraulic_pressure": 10.0,
///   "number_of_discs": 1,
///   "material_density": 7200.0,
///   "material_specific_heat": 500.0,
///   "material_yield_strength": 300.0,
///   "max_outer_diameter": 280.0,
///   "initial_disc_thickness": 5.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscInput {
    /// Vehicle mass (kg)
    pub mass_vehicle: f64,
    /// Rider mass (kg)
    pub mass_rider: f64,
    /// Speed at brake application (km/h)
    pub initial_velocity: f64,
    /// Stopping distance (m)
    pub stopping_distance: f64,
    /// Rolling radius of the wheel (m)
    pub wheel_radius: f64,
    /// Pad-disc friction coefficient
    pub friction_coefficient: f64,
    /// Total caliper piston area acting on one pad (cm²)
    pub caliper_piston_area: f64,
    /// Line pressure (MPa)
    pub hydraulic_pressure: f64,
    /// Discs sharing the braking torque on this wheel
    pub number_of_discs: u32,
    /// Disc material density (kg/m³)
    pub material_density: f64,
    /// Disc material specific heat (J/kg·K)
    pub material_specific_heat: f64,
    /// Disc material yield strength (MPa)
    pub material_yield_strength: f64,
    /// Largest disc that fits the wheel (mm)
    pub max_outer_diameter: f64,
    /// New disc thickness (mm)
    pub initial_disc_thickness: f64,
}

impl InputSchema for DiscInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("mass_vehicle", "Vehicle mass", "kg", "180"),
        FieldSpec::float("mass_rider", "Rider mass", "kg", "80"),
        FieldSpec::float("initial_velocity", "Initial velocity", "km/h", "60"),
        FieldSpec::float("stopping_distance", "Stopping distance", "m", "20"),
        FieldSpec::float("wheel_radius", "Wheel radius", "m", "0.3"),
        FieldSpec::float("friction_coefficient", "Friction coefficient", "", "0.4"),
        FieldSpec::float("caliper_piston_area", "Caliper piston area", "cm²", "4"),
        FieldSpec::float("hydraulic_pressure", "Hydraulic pressure", "MPa", "10"),
        FieldSpec::int("number_of_discs", "Number of discs", "", "1"),
        FieldSpec::float("material_density", "Material density", "kg/m³", "7200"),
        FieldSpec::float("material_specific_heat", "Material specific heat", "J/kg·K", "500"),
        FieldSpec::float("material_yield_strength", "Material yield strength", "MPa", "300"),
        FieldSpec::float("max_outer_diameter", "Max outer diameter", "mm", "280"),
        FieldSpec::float("initial_disc_thickness", "Initial disc thickness", "mm", "5"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        DiscInput {
            mass_vehicle: r.float("mass_vehicle"),
            mass_rider: r.float("mass_rider"),
            initial_velocity: r.float("initial_velocity"),
            stopping_distance: r.float("stopping_distance"),
            wheel_radius: r.float("wheel_radius"),
            friction_coefficient: r.float("friction_coefficient"),
            caliper_piston_area: r.float("caliper_piston_area"),
            hydraulic_pressure: r.float("hydraulic_pressure"),
            number_of_discs: r.int("number_of_discs"),
            material_density: r.float("material_density"),
            material_specific_heat: r.float("material_specific_heat"),
            material_yield_strength: r.float("material_yield_strength"),
            max_outer_diameter: r.float("max_outer_diameter"),
            initial_disc_thickness: r.float("initial_disc_thickness"),
        }
    }
}

/// Results from disc sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscResult {
    /// Braking force at the tyre contact patch (N)
    pub braking_force_n: f64,
    /// Braking torque at the wheel (Nm)
    pub braking_torque_nm: f64,
    /// Braking torque carried by each disc (Nm)
    pub torque_per_disc_nm: Measure,
    /// Effective (friction) radius (mm)
    pub effective_radius_mm: f64,
    pub outer_diameter_mm: f64,
    pub inner_diameter_mm: f64,
    pub thickness_mm: f64,
    /// Discard thickness (mm)
    pub min_service_thickness_mm: f64,
    pub disc_mass_kg: f64,
    /// Kinetic energy absorbed in one stop (J)
    pub heat_energy_j: f64,
    /// Single-stop temperature rise (°C); 0 for a massless disc
    pub temp_rise_c: f64,
    /// Peak disc stress (Pa); 0 when the annulus area vanishes
    pub max_stress_pa: f64,
    /// Yield strength over peak stress; infinite at zero stress
    pub safety_factor: Measure,
}

/// Size a brake disc.
pub fn calculate(input: &DiscInput) -> DiscResult {
    let v: MetresPerSecond = KilometresPerHour(input.initial_velocity).into();
    let piston_area: SquareMetres = SquareCentimetres(input.caliper_piston_area).into();
    let pressure: Pascals = Megapascals(input.hydraulic_pressure).into();
    let yield_strength: Pascals = Megapascals(input.material_yield_strength).into();
    let d_o: Metres = Millimetres(input.max_outer_diameter).into();
    let thickness: Metres = Millimetres(input.initial_disc_thickness).into();

    // Stopping requirement
    let total_mass = input.mass_vehicle + input.mass_rider;
    let deceleration = v.0.powi(2) / (2.0 * input.stopping_distance);
    let braking_force = total_mass * deceleration;
    let braking_torque = braking_force * input.wheel_radius;
    let torque_per_disc =
        Measure::ratio_or_infinite(braking_torque, f64::from(input.number_of_discs));

    // Geometry
    let d_o = d_o.0;
    let d_i = d_o * INNER_DIAMETER_RATIO;
    let t = thickness.0;
    let effective_radius = (d_o + d_i) / 2.0;
    let min_service_thickness = t * MIN_SERVICE_THICKNESS_RATIO;

    // Thermal
    let disc_mass = PI * ((d_o / 2.0).powi(2) - (d_i / 2.0).powi(2)) * t * input.material_density;
    let heat_energy = 0.5 * total_mass * v.0.powi(2);
    let temp_rise = if disc_mass > 0.0 {
        heat_energy / (disc_mass * input.material_specific_heat)
    } else {
        0.0
    };

    // Stress
    let clamping_force = pressure.0 * piston_area.0;
    let frictional_force = 2.0 * clamping_force * input.friction_coefficient;
    let annulus = d_o.powi(2) - d_i.powi(2);
    let max_stress = if annulus > 0.0 {
        (frictional_force * effective_radius) / (PI * annulus * t)
    } else {
        0.0
    };
    let safety_factor = Measure::ratio_or_infinite(yield_strength.0, max_stress);

    DiscResult {
        braking_force_n: braking_force,
        braking_torque_nm: braking_torque,
        torque_per_disc_nm: torque_per_disc,
        effective_radius_mm: Millimetres::from(Metres(effective_radius)).0,
        outer_diameter_mm: Millimetres::from(Metres(d_o)).0,
        inner_diameter_mm: Millimetres::from(Metres(d_i)).0,
        thickness_mm: Millimetres::from(Metres(t)).0,
        min_service_thickness_mm: Millimetres::from(Metres(min_service_thickness)).0,
        disc_mass_kg: disc_mass,
        heat_energy_j: heat_energy,
        temp_rise_c: temp_rise,
        max_stress_pa: max_stress,
        safety_factor,
    }
}

impl ToReport for DiscResult {
    fn to_report(&self) -> Report {
        let safety = match self.safety_factor {
            Measure::Value(sf) => format!("{:.2} (Simplified)", sf),
            other => format!("{} (Simplified)", other.format(2, "")),
        };
        Report::new(Tool::Disc)
            .number("braking_force", "Braking force", self.braking_force_n, 2, "N")
            .number("braking_torque", "Braking torque", self.braking_torque_nm, 2, "Nm")
            .measure("torque_per_disc", "Torque per disc", self.torque_per_disc_nm, 2, "Nm")
            .number("effective_radius", "Effective radius", self.effective_radius_mm, 2, "mm")
            .number("outer_diameter", "Outer diameter", self.outer_diameter_mm, 2, "mm")
            .number("inner_diameter", "Inner diameter", self.inner_diameter_mm, 2, "mm")
            .number("thickness", "Thickness", self.thickness_mm, 2, "mm")
            .number(
                "min_service_thickness",
                "Min. service thickness",
                self.min_service_thickness_mm,
                2,
                "mm",
            )
            .number("disc_mass", "Disc mass", self.disc_mass_kg, 2, "kg")
            .number("heat_energy", "Heat energy", self.heat_energy_j / 1000.0, 2, "kJ")
            .number("temp_rise", "Temperature rise", self.temp_rise_c, 2, "°C")
            .text("safety_factor", "Safety factor", safety)
    }
}
