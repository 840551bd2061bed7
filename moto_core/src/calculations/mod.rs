//! # Component Calculations
//!
//! One module per design tool. Each follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, declares its form schema)
//! - `*Result` - Typed results; degenerate quantities are [`Measure`](crate::measure::Measure)s
//! - `calculate(&input) -> *Result` - Pure, total calculation function
//! - `impl ToReport for *Result` - Display rows with units
//!
//! ## Available Calculations
//!
//! Brakes and wheels:
//! - [`disc`] - Brake disc braking load, heat and stress
//! - [`caliper`] - Caliper clamp force and piston size
//! - [`brake_pad`] - Pad heat flux and wear life
//! - [`tyre`] - Tyre geometry and contact patch
//! - [`rim`] - Rim width compatibility
//!
//! Engine:
//! - [`piston`], [`wrist_pin`], [`connecting_rod`], [`crankshaft`], [`cylinder`]
//!
//! Transmission:
//! - [`clutch`], [`gearbox`], [`chain_sprocket`]

pub mod brake_pad;
pub mod caliper;
pub mod chain_sprocket;
pub mod clutch;
pub mod connecting_rod;
pub mod crankshaft;
pub mod cylinder;
pub mod disc;
pub mod gearbox;
pub mod piston;
pub mod rim;
pub mod tyre;
pub mod wrist_pin;

use serde::{Deserialize, Serialize};

use crate::report::{Report, ToReport};
use crate::tools::Tool;

// Re-export commonly used types
pub use brake_pad::{BrakePadInput, BrakePadResult};
pub use caliper::{CaliperInput, CaliperResult};
pub use chain_sprocket::{ChainSprocketInput, ChainSprocketResult};
pub use clutch::{ClutchInput, ClutchResult};
pub use connecting_rod::{ConnectingRodInput, ConnectingRodResult};
pub use crankshaft::{CrankshaftInput, CrankshaftResult};
pub use cylinder::{CylinderInput, CylinderResult};
pub use disc::{DiscInput, DiscResult};
pub use gearbox::{GearboxInput, GearboxResult};
pub use piston::{PistonInput, PistonResult};
pub use rim::{RimInput, RimResult};
pub use tyre::{TyreInput, TyreResult};
pub use wrist_pin::{WristPinInput, WristPinResult};

/// Enum wrapper for all calculation inputs.
///
/// Lets a typed input for any tool travel as one JSON document, e.g.
/// `{"tool": "clutch", "input": {"max_engine_torque": 60.0, ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "input", rename_all = "snake_case")]
pub enum CalculationItem {
    Disc(DiscInput),
    Caliper(CaliperInput),
    BrakePad(BrakePadInput),
    Tyre(TyreInput),
    Rim(RimInput),
    Piston(PistonInput),
    WristPin(WristPinInput),
    ConnectingRod(ConnectingRodInput),
    Crankshaft(CrankshaftInput),
    Cylinder(CylinderInput),
    Clutch(ClutchInput),
    Gearbox(GearboxInput),
    ChainSprocket(ChainSprocketInput),
}

impl CalculationItem {
    /// The tool this input belongs to
    pub fn tool(&self) -> Tool {
        match self {
            CalculationItem::Disc(_) => Tool::Disc,
            CalculationItem::Caliper(_) => Tool::Caliper,
            CalculationItem::BrakePad(_) => Tool::BrakePad,
            CalculationItem::Tyre(_) => Tool::Tyre,
            CalculationItem::Rim(_) => Tool::Rim,
            CalculationItem::Piston(_) => Tool::Piston,
            CalculationItem::WristPin(_) => Tool::WristPin,
            CalculationItem::ConnectingRod(_) => Tool::ConnectingRod,
            CalculationItem::Crankshaft(_) => Tool::Crankshaft,
            CalculationItem::Cylinder(_) => Tool::Cylinder,
            CalculationItem::Clutch(_) => Tool::Clutch,
            CalculationItem::Gearbox(_) => Tool::Gearbox,
            CalculationItem::ChainSprocket(_) => Tool::ChainSprocket,
        }
    }

    /// Run the calculation and format its report
    pub fn calculate(&self) -> Report {
        match self {
            CalculationItem::Disc(i) => disc::calculate(i).to_report(),
            CalculationItem::Caliper(i) => caliper::calculate(i).to_report(),
            CalculationItem::BrakePad(i) => brake_pad::calculate(i).to_report(),
            CalculationItem::Tyre(i) => tyre::calculate(i).to_report(),
            CalculationItem::Rim(i) => rim::calculate(i).to_report(),
            CalculationItem::Piston(i) => piston::calculate(i).to_report(),
            CalculationItem::WristPin(i) => wrist_pin::calculate(i).to_report(),
            CalculationItem::ConnectingRod(i) => connecting_rod::calculate(i).to_report(),
            CalculationItem::Crankshaft(i) => crankshaft::calculate(i).to_report(),
            CalculationItem::Cylinder(i) => cylinder::calculate(i).to_report(),
            CalculationItem::Clutch(i) => clutch::calculate(i).to_report(),
            CalculationItem::Gearbox(i) => gearbox::calculate(i).to_report(),
            CalculationItem::ChainSprocket(i) => chain_sprocket::calculate(i).to_report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_shape() {
        let item = CalculationItem::Cylinder(CylinderInput {
            cylinder_bore_diameter: 80.0,
            stroke_length: 70.0,
            max_combustion_pressure: 6.0,
            cylinder_material_strength: 250.0,
            safety_factor: 5.0,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.starts_with(r#"{"tool":"cylinder","input":{"#));

        let parsed: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tool(), Tool::Cylinder);
        assert_eq!(parsed.calculate().tool, Tool::Cylinder);
    }

    #[test]
    fn test_item_tag_matches_tool_serialization() {
        let json = r#"{"tool":"chain_sprocket","input":{
            "max_engine_power":20.0,"small_sprocket_rpm":2500.0,"chain_type":"525",
            "small_sprocket_teeth":15,"large_sprocket_teeth":45,"center_distance_mm":600.0}}"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.tool(), Tool::ChainSprocket);
        assert_eq!(serde_json::to_string(&item.tool()).unwrap(), r#""chain_sprocket""#);
    }
}
