//! # Chain and Sprocket Selection
//!
//! Final drive geometry (chain length in whole even links, sprocket pitch
//! circle and outside diameters) and a static strength check of the chosen
//! chain against the design power with a 1.2 service factor.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::calculations::chain_sprocket::{ChainSprocketInput, calculate};
//! use moto_core::reference::ChainType;
//!
//! let input = ChainSprocketInput {
//!     max_engine_power: 20.0,
//!     small_sprocket_rpm: 2500.0,
//!     chain_type: ChainType::Chain520,
//!     small_sprocket_teeth: 15,
//!     large_sprocket_teeth: 45,
//!     center_distance_mm: 600.0,
//! };
//! let result = calculate(&input);
//! assert_eq!(result.chain_length_links.value(), Some(108.0));
//! assert!(result.viable);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::reference::{ChainSpec, ChainType};
use crate::report::{Report, ToReport};
use crate::schema::{Choice, FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;

/// Power service factor for moderate shock loading
pub const SERVICE_FACTOR: f64 = 1.2;

/// Minimum static factor of safety for a viable selection
pub const MIN_FACTOR_OF_SAFETY: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSprocketInput {
    /// kW
    pub max_engine_power: f64,
    /// Gearbox output sprocket speed
    pub small_sprocket_rpm: f64,
    pub chain_type: ChainType,
    pub small_sprocket_teeth: u32,
    pub large_sprocket_teeth: u32,
    pub center_distance_mm: f64,
}

impl InputSchema for ChainSprocketInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::float("max_engine_power", "Max engine power", "kW", "20"),
        FieldSpec::float("small_sprocket_rpm", "Small sprocket speed", "rpm", "2500"),
        FieldSpec::choice("chain_type", "Chain type", ChainType::OPTIONS, "520"),
        FieldSpec::int("small_sprocket_teeth", "Small sprocket teeth", "", "15"),
        FieldSpec::int("large_sprocket_teeth", "Large sprocket teeth", "", "45"),
        FieldSpec::float("center_distance_mm", "Centre distance", "mm", "600"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        ChainSprocketInput {
            max_engine_power: r.float("max_engine_power"),
            small_sprocket_rpm: r.float("small_sprocket_rpm"),
            chain_type: r.choice("chain_type"),
            small_sprocket_teeth: r.int("small_sprocket_teeth"),
            large_sprocket_teeth: r.int("large_sprocket_teeth"),
            center_distance_mm: r.float("center_distance_mm"),
        }
    }
}

/// Pitch circle and outside diameter of one sprocket (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprocket {
    pub pitch_circle_diameter: Measure,
    pub outside_diameter: Measure,
}

impl Sprocket {
    pub fn new(pitch: f64, teeth: u32) -> Self {
        let half_angle = (180.0 / f64::from(teeth)).to_radians();
        Sprocket {
            pitch_circle_diameter: Measure::from_f64(pitch / half_angle.sin()),
            outside_diameter: Measure::from_f64(pitch * (0.6 + 1.0 / half_angle.tan())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSprocketResult {
    pub final_drive_ratio: Measure,
    pub chain_pitch_mm: f64,
    /// Rounded up to an even number of links
    pub chain_length_links: Measure,
    pub chain_length_mm: Measure,
    pub small_sprocket: Sprocket,
    pub large_sprocket: Sprocket,
    /// m/s
    pub chain_velocity: f64,
    /// N; 0 when the chain is not moving
    pub working_load_n: f64,
    pub factor_of_safety: Measure,
    pub viable: bool,
}

/// Chain length in pitches for the given sprocket pair and centre distance.
pub fn chain_length_pitches(pitch: f64, t1: f64, t2: f64, center_distance: f64) -> f64 {
    2.0 * (center_distance / pitch)
        + (t1 + t2) / 2.0
        + ((t2 - t1) / (2.0 * PI)).powi(2) * (pitch / center_distance)
}

pub fn calculate(input: &ChainSprocketInput) -> ChainSprocketResult {
    let chain = ChainSpec::lookup(input.chain_type);
    let pitch = chain.pitch_mm;
    let t1 = f64::from(input.small_sprocket_teeth);
    let t2 = f64::from(input.large_sprocket_teeth);

    let length_pitches = chain_length_pitches(pitch, t1, t2, input.center_distance_mm);
    let links = Measure::from_f64((length_pitches / 2.0).ceil() * 2.0);

    let design_power_kw = input.max_engine_power * SERVICE_FACTOR;
    let chain_velocity = (input.small_sprocket_rpm * t1 * pitch) / 60_000.0;
    let working_load = if chain_velocity > 0.0 {
        design_power_kw * 1000.0 / chain_velocity
    } else {
        0.0
    };
    let factor_of_safety = Measure::ratio_or_infinite(chain.breaking_strength_n, working_load);
    let viable = match factor_of_safety {
        Measure::Value(fos) => fos > MIN_FACTOR_OF_SAFETY,
        Measure::Infinite => true,
        Measure::Invalid => false,
    };

    ChainSprocketResult {
        final_drive_ratio: Measure::from_f64(t2 / t1),
        chain_pitch_mm: pitch,
        chain_length_links: links,
        chain_length_mm: links.map(|n| n * pitch),
        small_sprocket: Sprocket::new(pitch, input.small_sprocket_teeth),
        large_sprocket: Sprocket::new(pitch, input.large_sprocket_teeth),
        chain_velocity,
        working_load_n: working_load,
        factor_of_safety,
        viable,
    }
}

impl ChainSprocketResult {
    pub fn viability_class(&self) -> &'static str {
        if self.viable {
            "viable"
        } else {
            "not-viable"
        }
    }

    pub fn viability_note(&self) -> &'static str {
        if self.viable {
            "Chain selection is safe for the given load."
        } else {
            "Warning: Factor of safety is low. Consider a stronger chain or different parameters."
        }
    }
}

impl ToReport for ChainSprocketResult {
    fn to_report(&self) -> Report {
        let ratio = match self.final_drive_ratio {
            Measure::Value(r) => format!("{:.2}:1", r),
            other => other.to_string(),
        };

        Report::new(Tool::ChainSprocket)
            .text("final_drive_ratio", "Final drive ratio", ratio)
            .number("chain_pitch_mm", "Chain pitch", self.chain_pitch_mm, 3, "mm")
            .measure("chain_length_links", "Chain length", self.chain_length_links, 0, "links")
            .measure("chain_length_mm", "Chain length", self.chain_length_mm, 2, "mm")
            .measure(
                "small_sprocket_pcd",
                "Small sprocket PCD",
                self.small_sprocket.pitch_circle_diameter,
                2,
                "mm",
            )
            .measure(
                "small_sprocket_od",
                "Small sprocket OD",
                self.small_sprocket.outside_diameter,
                2,
                "mm",
            )
            .measure(
                "large_sprocket_pcd",
                "Large sprocket PCD",
                self.large_sprocket.pitch_circle_diameter,
                2,
                "mm",
            )
            .measure(
                "large_sprocket_od",
                "Large sprocket OD",
                self.large_sprocket.outside_diameter,
                2,
                "mm",
            )
            .number("chain_velocity", "Chain velocity", self.chain_velocity, 2, "m/s")
            .number("working_load", "Working load", self.working_load_n, 2, "N")
            .measure("factor_of_safety", "Factor of safety", self.factor_of_safety, 2, "")
            .text("viability_note", "Viability", self.viability_note())
            .text("viability_class", "Class", self.viability_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_drive() -> ChainSprocketInput {
        ChainSprocketInput {
            max_engine_power: 20.0,
            small_sprocket_rpm: 2500.0,
            chain_type: ChainType::Chain520,
            small_sprocket_teeth: 15,
            large_sprocket_teeth: 45,
            center_distance_mm: 600.0,
        }
    }

    #[test]
    fn test_chain_length() {
        let result = calculate(&test_drive());
        let lp = chain_length_pitches(15.875, 15.0, 45.0, 600.0);
        assert!(lp > 106.0 && lp < 107.0);
        assert_eq!(result.chain_length_links, Measure::Value(108.0));
        assert!((result.chain_length_mm.value().unwrap() - 1714.5).abs() < 1e-9);
    }

    #[test]
    fn test_sprockets() {
        let result = calculate(&test_drive());
        let pcd = result.small_sprocket.pitch_circle_diameter.value().unwrap();
        assert!((pcd - 15.875 / 12f64.to_radians().sin()).abs() < 1e-9);
        let od = result.large_sprocket.outside_diameter.value().unwrap();
        assert!((od - 15.875 * (0.6 + 1.0 / 4f64.to_radians().tan())).abs() < 1e-9);
    }

    #[test]
    fn test_strength_check() {
        let result = calculate(&test_drive());
        let v = 2500.0 * 15.0 * 15.875 / 60_000.0;
        let load = 24.0 * 1000.0 / v;
        assert!((result.working_load_n - load).abs() < 1e-9);
        let fos = result.factor_of_safety.value().unwrap();
        assert!((fos - 35_000.0 / load).abs() < 1e-9);
        assert!(result.viable);
    }

    #[test]
    fn test_low_factor_of_safety() {
        let mut drive = test_drive();
        drive.max_engine_power = 40.0;
        let report = calculate(&drive).to_report();
        assert_eq!(report.text_of("viability_class"), Some("not-viable"));
        assert!(report.text_of("viability_note").unwrap().starts_with("Warning"));
    }

    #[test]
    fn test_stationary_chain() {
        let mut drive = test_drive();
        drive.small_sprocket_rpm = 0.0;
        let result = calculate(&drive);
        assert_eq!(result.working_load_n, 0.0);
        assert!(result.factor_of_safety.is_infinite());

        let report = result.to_report();
        assert_eq!(report.text_of("working_load"), Some("0.00 N"));
        assert_eq!(report.text_of("factor_of_safety"), Some("Infinite"));
        assert_eq!(report.text_of("viability_class"), Some("viable"));
    }

    #[test]
    fn test_report_formatting() {
        let report = calculate(&test_drive()).to_report();
        assert_eq!(report.text_of("final_drive_ratio"), Some("3.00:1"));
        assert_eq!(report.text_of("chain_pitch_mm"), Some("15.875 mm"));
        assert_eq!(report.text_of("chain_length_links"), Some("108 links"));
    }

    #[test]
    fn test_zero_teeth_does_not_panic() {
        let mut drive = test_drive();
        drive.small_sprocket_teeth = 0;
        let report = calculate(&drive).to_report();
        assert_eq!(report.text_of("final_drive_ratio"), Some("Infinite"));
        assert!(report.text_of("small_sprocket_pcd").is_some());
    }
}
