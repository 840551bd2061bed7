//! # Tool Registry
//!
//! The closed set of design tools and the dispatch from untyped form data
//! to a typed input, a calculation and its report.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::schema::FormValues;
//! use moto_core::tools::Tool;
//!
//! let tool = Tool::from_slug("rim").unwrap();
//! let form = FormValues::examples(tool.fields());
//! let report = tool.run(&form).unwrap();
//! assert_eq!(report.text_of("compatibility_class"), Some("ideal"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::*;
use crate::errors::{CalcError, CalcResult};
use crate::report::Report;
use crate::schema::{FieldSpec, FormValues, InputSchema};

/// A motorcycle component design tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Disc,
    Caliper,
    BrakePad,
    Tyre,
    Rim,
    Piston,
    WristPin,
    ConnectingRod,
    Crankshaft,
    Cylinder,
    Clutch,
    Gearbox,
    ChainSprocket,
}

impl Tool {
    /// All tools, in menu order
    pub const ALL: [Tool; 13] = [
        Tool::Disc,
        Tool::Caliper,
        Tool::BrakePad,
        Tool::Tyre,
        Tool::Rim,
        Tool::Piston,
        Tool::WristPin,
        Tool::ConnectingRod,
        Tool::Crankshaft,
        Tool::Cylinder,
        Tool::Clutch,
        Tool::Gearbox,
        Tool::ChainSprocket,
    ];

    /// URL path segment
    pub fn slug(&self) -> &'static str {
        match self {
            Tool::Disc => "disc",
            Tool::Caliper => "caliper",
            Tool::BrakePad => "brakepad",
            Tool::Tyre => "tyre",
            Tool::Rim => "rim",
            Tool::Piston => "piston",
            Tool::WristPin => "wristpin",
            Tool::ConnectingRod => "connectingrod",
            Tool::Crankshaft => "crankshaft",
            Tool::Cylinder => "cylinder",
            Tool::Clutch => "clutch",
            Tool::Gearbox => "gearbox",
            Tool::ChainSprocket => "chainsprocket",
        }
    }

    /// Look a tool up by slug
    pub fn from_slug(slug: &str) -> CalcResult<Tool> {
        Tool::ALL
            .into_iter()
            .find(|t| t.slug() == slug)
            .ok_or_else(|| CalcError::unknown_tool(slug))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tool::Disc => "Brake Disc",
            Tool::Caliper => "Brake Caliper",
            Tool::BrakePad => "Brake Pad",
            Tool::Tyre => "Tyre",
            Tool::Rim => "Rim Compatibility",
            Tool::Piston => "Piston",
            Tool::WristPin => "Wrist Pin",
            Tool::ConnectingRod => "Connecting Rod",
            Tool::Crankshaft => "Crankshaft",
            Tool::Cylinder => "Cylinder",
            Tool::Clutch => "Clutch",
            Tool::Gearbox => "Gearbox",
            Tool::ChainSprocket => "Chain & Sprocket",
        }
    }

    /// Declared input fields, in form order
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Tool::Disc => DiscInput::FIELDS,
            Tool::Caliper => CaliperInput::FIELDS,
            Tool::BrakePad => BrakePadInput::FIELDS,
            Tool::Tyre => TyreInput::FIELDS,
            Tool::Rim => RimInput::FIELDS,
            Tool::Piston => PistonInput::FIELDS,
            Tool::WristPin => WristPinInput::FIELDS,
            Tool::ConnectingRod => ConnectingRodInput::FIELDS,
            Tool::Crankshaft => CrankshaftInput::FIELDS,
            Tool::Cylinder => CylinderInput::FIELDS,
            Tool::Clutch => ClutchInput::FIELDS,
            Tool::Gearbox => GearboxInput::FIELDS,
            Tool::ChainSprocket => ChainSprocketInput::FIELDS,
        }
    }

    /// Coerce form data into this tool's typed input
    pub fn parse(&self, form: &FormValues) -> CalcResult<CalculationItem> {
        Ok(match self {
            Tool::Disc => CalculationItem::Disc(DiscInput::from_form(form)?),
            Tool::Caliper => CalculationItem::Caliper(CaliperInput::from_form(form)?),
            Tool::BrakePad => CalculationItem::BrakePad(BrakePadInput::from_form(form)?),
            Tool::Tyre => CalculationItem::Tyre(TyreInput::from_form(form)?),
            Tool::Rim => CalculationItem::Rim(RimInput::from_form(form)?),
            Tool::Piston => CalculationItem::Piston(PistonInput::from_form(form)?),
            Tool::WristPin => CalculationItem::WristPin(WristPinInput::from_form(form)?),
            Tool::ConnectingRod => {
                CalculationItem::ConnectingRod(ConnectingRodInput::from_form(form)?)
            }
            Tool::Crankshaft => CalculationItem::Crankshaft(CrankshaftInput::from_form(form)?),
            Tool::Cylinder => CalculationItem::Cylinder(CylinderInput::from_form(form)?),
            Tool::Clutch => CalculationItem::Clutch(ClutchInput::from_form(form)?),
            Tool::Gearbox => CalculationItem::Gearbox(GearboxInput::from_form(form)?),
            Tool::ChainSprocket => {
                CalculationItem::ChainSprocket(ChainSprocketInput::from_form(form)?)
            }
        })
    }

    /// Parse, calculate and format in one step
    pub fn run(&self, form: &FormValues) -> CalcResult<Report> {
        Ok(self.parse(form)?.calculate())
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    #[test]
    fn test_slugs_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_slug(tool.slug()).unwrap(), tool);
        }
    }

    #[test]
    fn test_unknown_slug() {
        let err = Tool::from_slug("sidecar").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_TOOL");
    }

    #[test]
    fn test_every_example_form_runs() {
        for tool in Tool::ALL {
            let form = FormValues::examples(tool.fields());
            let report = tool
                .run(&form)
                .unwrap_or_else(|e| panic!("{} example form failed: {}", tool.slug(), e));
            assert_eq!(report.tool, tool);
            assert!(!report.rows.is_empty());
        }
    }

    #[test]
    fn test_example_values_match_field_kinds() {
        for tool in Tool::ALL {
            for field in tool.fields() {
                match field.kind {
                    FieldKind::Float => {
                        assert!(field.example.parse::<f64>().is_ok(), "{}", field.name)
                    }
                    FieldKind::Int => {
                        assert!(field.example.parse::<u32>().is_ok(), "{}", field.name)
                    }
                    FieldKind::Choice(options) => {
                        assert!(options.contains(&field.example), "{}", field.name)
                    }
                }
            }
        }
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for tool in Tool::ALL {
            for field in tool.fields() {
                let mut form = FormValues::examples(tool.fields());
                form.remove(field.name);
                let err = tool.run(&form).unwrap_err();
                assert!(err.to_string().starts_with("Invalid or missing input:"));
                assert_eq!(err.issues().len(), 1);
                assert_eq!(err.issues()[0].field, field.name);
            }
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        for tool in Tool::ALL {
            let form = FormValues::examples(tool.fields());
            assert_eq!(tool.run(&form).unwrap(), tool.run(&form).unwrap());
        }
    }

    #[test]
    fn test_no_report_ever_shows_nan() {
        for tool in Tool::ALL {
            let zeros: FormValues = tool
                .fields()
                .iter()
                .map(|f| match f.kind {
                    FieldKind::Choice(_) => (f.name, f.example),
                    _ => (f.name, "0"),
                })
                .collect();
            let report = tool.run(&zeros).unwrap();
            assert_no_nan_text(&report, tool.slug());
        }
    }

    fn assert_no_nan_text(report: &Report, context: &str) {
        for row in &report.rows {
            let text = row.value.to_string();
            assert!(
                !text.contains("NaN") && !text.contains("inf"),
                "{} {}: {}",
                context,
                row.key,
                text
            );
        }
    }

    #[test]
    fn test_extreme_inputs_still_report() {
        let max_int = u32::MAX.to_string();
        let max_gears = crate::calculations::gearbox::MAX_GEARS.to_string();
        for float in ["1e308", "-1e308", "-1", "1e-300"] {
            for tool in Tool::ALL {
                let form: FormValues = tool
                    .fields()
                    .iter()
                    .map(|f| match f.kind {
                        FieldKind::Float => (f.name, float),
                        FieldKind::Int if f.name == "number_of_gears" => {
                            (f.name, max_gears.as_str())
                        }
                        FieldKind::Int => (f.name, max_int.as_str()),
                        FieldKind::Choice(_) => (f.name, f.example),
                    })
                    .collect();
                let report = tool
                    .run(&form)
                    .unwrap_or_else(|e| panic!("{} rejected {}: {}", tool.slug(), float, e));
                assert_no_nan_text(&report, &format!("{} with {}", tool.slug(), float));
            }
        }
    }

    #[test]
    fn test_disc_reference_case() {
        let form = FormValues::examples(Tool::Disc.fields())
            .with("mass_vehicle", "180")
            .with("mass_rider", "80")
            .with("initial_velocity", "100")
            .with("stopping_distance", "40")
            .with("wheel_radius", "0.3");
        let report = Tool::Disc.run(&form).unwrap();
        // 260 kg · (27.78 m/s)² / 80 m
        assert_eq!(report.text_of("braking_force"), Some("2507.72 N"));
    }
}
