//! # Gearbox Sizing
//!
//! Geometric ratio progression between first and top gear, and Lewis
//! bending sizing of the first gear pair on the input shaft.
//!
//! Ratios follow `ratio_n = first / r^n` with `r = (first / top)^(1/(N-1))`.
//! A single-speed box has no progression: its only ratio is first gear and
//! the progression factor is reported as `Invalid`. Boxes with more than
//! [`MAX_GEARS`] speeds are rejected.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{Megapascals, Metres, Millimetres, Pascals};

/// Lewis form factor approximation `Y = A - B / z` (20° full depth)
const LEWIS_A: f64 = 0.484;
const LEWIS_B: f64 = 2.87;

/// Largest accepted number of gears
pub const MAX_GEARS: u32 = 12;

/// Input parameters for gearbox sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearboxInput {
    /// Nm
    pub max_engine_torque: f64,
    pub primary_drive_ratio: f64,
    pub first_gear_ratio: f64,
    pub top_gear_ratio: f64,
    pub number_of_gears: u32,
    /// MPa
    pub gear_material_strength: f64,
    pub safety_factor: f64,
    /// mm
    pub module: f64,
    pub pinion_teeth_1st_gear: u32,
}

impl InputSchema for GearboxInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("max_engine_torque", "Max engine torque", "Nm", "60"),
        FieldSpec::float("primary_drive_ratio", "Primary drive ratio", "", "2.5"),
        FieldSpec::float("first_gear_ratio", "First gear ratio", "", "2.8"),
        FieldSpec::float("top_gear_ratio", "Top gear ratio", "", "1.0"),
        FieldSpec::int("number_of_gears", "Number of gears", "", "6"),
        FieldSpec::float("gear_material_strength", "Gear material strength", "MPa", "800"),
        FieldSpec::float("safety_factor", "Safety factor", "", "2"),
        FieldSpec::float("module", "Module", "mm", "2.5"),
        FieldSpec::int("pinion_teeth_1st_gear", "Pinion teeth (1st gear)", "", "14"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        GearboxInput {
            max_engine_torque: r.float("max_engine_torque"),
            primary_drive_ratio: r.float("primary_drive_ratio"),
            first_gear_ratio: r.float("first_gear_ratio"),
            top_gear_ratio: r.float("top_gear_ratio"),
            number_of_gears: r.int_at_most("number_of_gears", MAX_GEARS),
            gear_material_strength: r.float("gear_material_strength"),
            safety_factor: r.float("safety_factor"),
            module: r.float("module"),
            pinion_teeth_1st_gear: r.int("pinion_teeth_1st_gear"),
        }
    }
}

/// Results from gearbox sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearboxResult {
    /// Ratio step between adjacent gears
    pub progression_factor: Measure,
    /// First gear down to top gear
    pub gear_ratios: Vec<Measure>,
    /// Nm
    pub input_shaft_torque_nm: f64,
    pub pinion_teeth: u32,
    pub gear_teeth: u32,
    pub lewis_form_factor: f64,
    pub face_width_mm: f64,
    pub pinion_pitch_diameter_mm: f64,
    pub gear_pitch_diameter_mm: f64,
    pub center_distance_mm: f64,
}

/// Ratio progression for `gears` speeds. Above [`MAX_GEARS`] there is no
/// progression and the list is empty.
pub fn ratio_progression(first: f64, top: f64, gears: u32) -> (Measure, Vec<Measure>) {
    match gears {
        0 => (Measure::Invalid, Vec::new()),
        1 => (Measure::Invalid, vec![Measure::from_f64(first)]),
        n if n > MAX_GEARS => (Measure::Invalid, Vec::new()),
        n => {
            let factor = (first / top).powf(1.0 / f64::from(n - 1));
            let ratios = (0..n)
                .map(|i| Measure::from_f64(first / factor.powf(f64::from(i))))
                .collect();
            (Measure::from_f64(factor), ratios)
        }
    }
}

/// Size a gearbox.
pub fn calculate(input: &GearboxInput) -> GearboxResult {
    let (progression_factor, gear_ratios) =
        ratio_progression(input.first_gear_ratio, input.top_gear_ratio, input.number_of_gears);

    let input_shaft_torque = input.max_engine_torque * input.primary_drive_ratio;

    let z1 = input.pinion_teeth_1st_gear;
    // Saturating cast: a negative ratio gives zero teeth
    let z2 = (f64::from(z1) * input.first_gear_ratio).round() as u32;
    let d1 = input.module * f64::from(z1);
    let d2 = input.module * f64::from(z2);

    let pinion_radius: Metres = Millimetres(d1 / 2.0).into();
    let tangential_force = input_shaft_torque / pinion_radius.0;
    let lewis_form_factor = LEWIS_A - LEWIS_B / f64::from(z1);
    let allowable_stress: Pascals =
        Megapascals(input.gear_material_strength / input.safety_factor).into();
    let module: Metres = Millimetres(input.module).into();
    let face_width =
        Metres(tangential_force / (allowable_stress.0 * PI * module.0 * lewis_form_factor));

    GearboxResult {
        progression_factor,
        gear_ratios,
        input_shaft_torque_nm: input_shaft_torque,
        pinion_teeth: z1,
        gear_teeth: z2,
        lewis_form_factor,
        face_width_mm: Millimetres::from(face_width).0,
        pinion_pitch_diameter_mm: d1,
        gear_pitch_diameter_mm: d2,
        center_distance_mm: (d1 + d2) / 2.0,
    }
}

impl ToReport for GearboxResult {
    fn to_report(&self) -> Report {
        let ratios = self
            .gear_ratios
            .iter()
            .map(|ratio| match ratio {
                Measure::Value(r) => format!("{:.3}:1", r),
                other => other.to_string(),
            })
            .collect();

        Report::new(Tool::Gearbox)
            .list("all_gear_ratios", "Gear ratios", ratios)
            .measure("progression_factor", "Progression factor", self.progression_factor, 3, "")
            .number("input_shaft_torque", "Input shaft torque", self.input_shaft_torque_nm, 2, "Nm")
            .text("pinion_teeth", "Pinion teeth", self.pinion_teeth.to_string())
            .text("gear_teeth", "Gear teeth", self.gear_teeth.to_string())
            .number("lewis_form_factor", "Lewis form factor", self.lewis_form_factor, 3, "")
            .number("face_width", "Face width", self.face_width_mm, 2, "mm")
            .number(
                "pinion_pitch_diameter",
                "Pinion pitch diameter",
                self.pinion_pitch_diameter_mm,
                2,
                "mm",
            )
            .number(
                "gear_pitch_diameter",
                "Gear pitch diameter",
                self.gear_pitch_diameter_mm,
                2,
                "mm",
            )
            .number("center_distance", "Centre distance", self.center_distance_mm, 2, "mm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DisplayValue;

    fn test_gearbox() -> GearboxInput {
        GearboxInput {
            max_engine_torque: 60.0,
            primary_drive_ratio: 2.5,
            first_gear_ratio: 2.8,
            top_gear_ratio: 1.0,
            number_of_gears: 6,
            gear_material_strength: 800.0,
            safety_factor: 2.0,
            module: 2.5,
            pinion_teeth_1st_gear: 14,
        }
    }

    fn ratios_of(report: &Report) -> Vec<String> {
        report
            .get("all_gear_ratios")
            .and_then(DisplayValue::as_list)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    #[test]
    fn test_progression_runs_first_to_top() {
        let result = calculate(&test_gearbox());
        assert_eq!(result.gear_ratios.len(), 6);
        let first = result.gear_ratios[0].value().unwrap();
        let top = result.gear_ratios[5].value().unwrap();
        assert!((first - 2.8).abs() < 1e-12);
        assert!((top - 1.0).abs() < 1e-9);

        let factor = result.progression_factor.value().unwrap();
        assert!((factor - 2.8f64.powf(0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_formatting() {
        let ratios = ratios_of(&calculate(&test_gearbox()).to_report());
        assert_eq!(ratios.first().map(String::as_str), Some("2.800:1"));
        assert_eq!(ratios.last().map(String::as_str), Some("1.000:1"));
    }

    #[test]
    fn test_single_gear() {
        let mut gearbox = test_gearbox();
        gearbox.number_of_gears = 1;
        let result = calculate(&gearbox);
        assert_eq!(result.gear_ratios, vec![Measure::Value(2.8)]);
        assert!(result.progression_factor.is_invalid());

        let report = result.to_report();
        assert_eq!(ratios_of(&report), vec!["2.800:1".to_string()]);
        assert_eq!(report.text_of("progression_factor"), Some("Invalid"));
    }

    #[test]
    fn test_zero_gears() {
        let mut gearbox = test_gearbox();
        gearbox.number_of_gears = 0;
        let result = calculate(&gearbox);
        assert!(result.gear_ratios.is_empty());
        assert!(result.progression_factor.is_invalid());
    }

    #[test]
    fn test_twelve_gears_is_the_limit() {
        let (factor, ratios) = ratio_progression(2.8, 1.0, MAX_GEARS);
        assert_eq!(ratios.len(), 12);
        assert!(factor.value().is_some());
        assert!((ratios[11].value().unwrap() - 1.0).abs() < 1e-9);

        let (factor, ratios) = ratio_progression(2.8, 1.0, u32::MAX);
        assert!(factor.is_invalid());
        assert!(ratios.is_empty());
    }

    #[test]
    fn test_huge_gear_count_is_rejected_on_input() {
        let form = crate::schema::FormValues::examples(GearboxInput::FIELDS)
            .with("number_of_gears", "4000000000");
        let err = GearboxInput::from_form(&form).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].field, "number_of_gears");
        assert_eq!(err.issues()[0].reason, "must be at most 12");

        let form =
            crate::schema::FormValues::examples(GearboxInput::FIELDS).with("number_of_gears", "13");
        assert!(GearboxInput::from_form(&form).is_err());
    }

    #[test]
    fn test_gear_pair() {
        let result = calculate(&test_gearbox());
        // round(14 · 2.8) = round(39.2)
        assert_eq!(result.gear_teeth, 39);
        assert!((result.pinion_pitch_diameter_mm - 35.0).abs() < 1e-9);
        assert!((result.gear_pitch_diameter_mm - 97.5).abs() < 1e-9);
        assert!((result.center_distance_mm - 66.25).abs() < 1e-9);
    }

    #[test]
    fn test_face_width() {
        let result = calculate(&test_gearbox());
        let force = 150.0 / 0.0175;
        let y = 0.484 - 2.87 / 14.0;
        let expected = force / (400e6 * PI * 0.0025 * y) * 1000.0;
        assert!((result.lewis_form_factor - y).abs() < 1e-12);
        assert!((result.face_width_mm - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_pinion_teeth_does_not_panic() {
        let mut gearbox = test_gearbox();
        gearbox.pinion_teeth_1st_gear = 0;
        let report = calculate(&gearbox).to_report();
        assert_eq!(report.text_of("gear_teeth"), Some("0"));
        assert!(report.text_of("face_width").is_some());
    }
}
