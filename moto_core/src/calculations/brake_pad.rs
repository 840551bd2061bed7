//! # Brake Pad Sizing
//!
//! Heat flux through the pad face during one stop, and pad life from a
//! wear rate.

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{KilometresPerHour, MetresPerSecond, SquareCentimetres, SquareMetres};

/// Input parameters for brake pad sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrakePadInput {
    /// Vehicle plus rider (kg)
    pub total_mass: f64,
    /// km/h
    pub initial_velocity: f64,
    /// m
    pub stopping_distance: f64,
    /// Pad friction face area (cm²)
    pub pad_area: f64,
    /// Material lost per 1000 km (mm)
    pub pad_wear_rate: f64,
    /// Usable friction material (mm)
    pub pad_thickness: f64,
}

impl InputSchema for BrakePadInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("total_mass", "Total mass", "kg", "260"),
        FieldSpec::float("initial_velocity", "Initial velocity", "km/h", "100"),
        FieldSpec::float("stopping_distance", "Stopping distance", "m", "45"),
        FieldSpec::float("pad_area", "Pad area", "cm²", "20"),
        FieldSpec::float("pad_wear_rate", "Pad wear rate", "mm/1000 km", "0.5"),
        FieldSpec::float("pad_thickness", "Pad thickness", "mm", "8"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        BrakePadInput {
            total_mass: r.float("total_mass"),
            initial_velocity: r.float("initial_velocity"),
            stopping_distance: r.float("stopping_distance"),
            pad_area: r.float("pad_area"),
            pad_wear_rate: r.float("pad_wear_rate"),
            pad_thickness: r.float("pad_thickness"),
        }
    }
}

/// Results from pad sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrakePadResult {
    /// Mean heat flux into the pad face (W/m²); 0 for an instantaneous stop
    pub heat_flux_w_m2: f64,
    /// Distance to wear through the pad (km)
    pub wear_life_km: Measure,
    /// Stop duration (s)
    pub stopping_time_s: f64,
}

/// Size a brake pad.
pub fn calculate(input: &BrakePadInput) -> BrakePadResult {
    let v: MetresPerSecond = KilometresPerHour(input.initial_velocity).into();
    let pad_area: SquareMetres = SquareCentimetres(input.pad_area).into();

    let deceleration = v.0.powi(2) / (2.0 * input.stopping_distance);
    let stopping_time = if deceleration > 0.0 { v.0 / deceleration } else { 0.0 };
    let heat_energy = 0.5 * input.total_mass * v.0.powi(2);

    let exposure = pad_area.0 * stopping_time;
    let heat_flux = if exposure > 0.0 { heat_energy / exposure } else { 0.0 };

    let wear_life =
        Measure::ratio_or_infinite(input.pad_thickness, input.pad_wear_rate).map(|x| x * 1000.0);

    BrakePadResult {
        heat_flux_w_m2: heat_flux,
        wear_life_km: wear_life,
        stopping_time_s: stopping_time,
    }
}

impl ToReport for BrakePadResult {
    fn to_report(&self) -> Report {
        Report::new(Tool::BrakePad)
            .number("heat_flux", "Heat flux", self.heat_flux_w_m2 / 1000.0, 2, "kW/m²")
            .measure("wear_life", "Wear life", self.wear_life_km, 2, "km")
            .number("stopping_time", "Stopping time", self.stopping_time_s, 2, "s")
    }
}
