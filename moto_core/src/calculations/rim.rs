//! # Rim Compatibility
//!
//! Checks a proposed rim width against the tyre manufacturers' recommended
//! range for the tyre's section width.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::calculations::rim::{RimInput, RimFit, calculate};
//!
//! let input = RimInput {
//!     tyre_width_mm: 120,
//!     tyre_aspect_ratio: 70,
//!     rim_diameter_inches: 17.0,
//!     proposed_rim_width_inches: 3.5,
//! };
//! assert_eq!(calculate(&input).fit, RimFit::Ideal);
//! ```

use serde::{Deserialize, Serialize};

use crate::reference::RimWidthRange;
use crate::report::{Report, ToReport};
use crate::schema::{FieldReader, FieldSpec, InputSchema};
use crate::tools::Tool;
use crate::units::{Inches, Millimetres};

/// Nominal rim flange height (mm)
pub const FLANGE_HEIGHT_MM: f64 = 17.5;

/// Input parameters for the rim check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RimInput {
    /// Tyre section width (mm)
    pub tyre_width_mm: u32,
    /// Tyre aspect ratio (%)
    pub tyre_aspect_ratio: u32,
    pub rim_diameter_inches: f64,
    pub proposed_rim_width_inches: f64,
}

impl InputSchema for RimInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::int("tyre_width_mm", "Tyre width", "mm", "120"),
        FieldSpec::int("tyre_aspect_ratio", "Tyre aspect ratio", "%", "70"),
        FieldSpec::float("rim_diameter_inches", "Rim diameter", "in", "17"),
        FieldSpec::float("proposed_rim_width_inches", "Proposed rim width", "in", "3.50"),
    ];

    fn read(r: &mut FieldReader<'_>) -> Self {
        RimInput {
            tyre_width_mm: r.int("tyre_width_mm"),
            tyre_aspect_ratio: r.int("tyre_aspect_ratio"),
            rim_diameter_inches: r.float("rim_diameter_inches"),
            proposed_rim_width_inches: r.float("proposed_rim_width_inches"),
        }
    }
}

/// How well the proposed rim suits the tyre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RimFit {
    /// Matches the design width
    Ideal,
    /// Inside the permitted range
    Acceptable,
    /// Outside the permitted range
    NotRecommended,
    /// Tyre width not covered by the table
    OutOfRange,
}

impl RimFit {
    pub fn code(&self) -> &'static str {
        match self {
            RimFit::Ideal => "ideal",
            RimFit::Acceptable => "acceptable",
            RimFit::NotRecommended => "not-recommended",
            RimFit::OutOfRange => "out-of-range",
        }
    }

    /// Compatibility class shown to the user. A tyre outside the table
    /// cannot be recommended either, so it shares that class.
    pub fn compatibility_class(&self) -> &'static str {
        match self {
            RimFit::OutOfRange => RimFit::NotRecommended.code(),
            other => other.code(),
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            RimFit::Ideal => "Ideal: Proposed rim width matches the tyre's design width.",
            RimFit::Acceptable => "Acceptable: Proposed rim width is within the permitted range.",
            RimFit::NotRecommended => {
                "Not Recommended: Proposed rim width is outside the permitted range for this tyre."
            }
            RimFit::OutOfRange => "Tyre width is outside the standard range for this calculator.",
        }
    }
}

/// Results from the rim check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RimResult {
    /// e.g. "120/70-17"
    pub tyre_designation: String,
    /// `None` when the tyre width is not in the table
    pub recommended_range: Option<RimWidthRange>,
    pub fit: RimFit,
    pub bead_seat_diameter_mm: f64,
    pub flange_height_mm: f64,
}

/// Check rim compatibility.
pub fn calculate(input: &RimInput) -> RimResult {
    let recommended_range = RimWidthRange::for_tyre_width(input.tyre_width_mm);
    let proposed = input.proposed_rim_width_inches;

    let fit = match recommended_range {
        None => RimFit::OutOfRange,
        Some(range) if !range.permits(proposed) => RimFit::NotRecommended,
        Some(range) if range.is_ideal(proposed) => RimFit::Ideal,
        Some(_) => RimFit::Acceptable,
    };

    let rim_inches = input.rim_diameter_inches.trunc() as i64;

    RimResult {
        tyre_designation: format!(
            "{}/{}-{}",
            input.tyre_width_mm, input.tyre_aspect_ratio, rim_inches
        ),
        recommended_range,
        fit,
        bead_seat_diameter_mm: Millimetres::from(Inches(input.rim_diameter_inches)).0,
        flange_height_mm: FLANGE_HEIGHT_MM,
    }
}

impl ToReport for RimResult {
    fn to_report(&self) -> Report {
        let range = self
            .recommended_range
            .map(|r| r.describe())
            .unwrap_or_else(|| "N/A".to_string());
        Report::new(Tool::Rim)
            .text("tyre_designation", "Tyre designation", self.tyre_designation.clone())
            .text("recommended_rim_width_range", "Recommended rim width", range)
            .text("compatibility_note", "Compatibility", self.fit.note())
            .text("compatibility_class", "Class", self.fit.compatibility_class())
            .text("fit", "Fit", self.fit.code())
            .number(
                "bead_seat_diameter_mm",
                "Bead seat diameter",
                self.bead_seat_diameter_mm,
                2,
                "mm",
            )
            .number("flange_height_mm", "Flange height", self.flange_height_mm, 1, "mm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rim(tyre_width_mm: u32, proposed: f64) -> RimInput {
        RimInput {
            tyre_width_mm,
            tyre_aspect_ratio: 70,
            rim_diameter_inches: 17.0,
            proposed_rim_width_inches: proposed,
        }
    }

    fn class_of(input: &RimInput) -> String {
        calculate(input)
            .to_report()
            .text_of("compatibility_class")
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_ideal() {
        assert_eq!(class_of(&rim(120, 3.50)), "ideal");
    }

    #[test]
    fn test_acceptable() {
        assert_eq!(class_of(&rim(120, 3.20)), "acceptable");
    }

    #[test]
    fn test_not_recommended() {
        assert_eq!(class_of(&rim(120, 2.90)), "not-recommended");
        assert_eq!(calculate(&rim(120, 2.90)).fit, RimFit::NotRecommended);
    }

    #[test]
    fn test_width_outside_table() {
        let result = calculate(&rim(250, 3.50));
        assert_eq!(result.fit, RimFit::OutOfRange);
        let report = result.to_report();
        assert_eq!(report.text_of("recommended_rim_width_range"), Some("N/A"));
        assert_eq!(report.text_of("compatibility_class"), Some("not-recommended"));
        assert_eq!(report.text_of("fit"), Some("out-of-range"));
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        assert_eq!(calculate(&rim(120, 3.00)).fit, RimFit::Acceptable);
        assert_eq!(calculate(&rim(120, 3.75)).fit, RimFit::Acceptable);
    }

    #[test]
    fn test_designation_and_bead_seat() {
        let mut input = rim(180, 5.5);
        input.tyre_aspect_ratio = 55;
        input.rim_diameter_inches = 17.5;
        let report = calculate(&input).to_report();
        assert_eq!(report.text_of("tyre_designation"), Some("180/55-17"));
        assert_eq!(report.text_of("bead_seat_diameter_mm"), Some("444.50 mm"));
        assert_eq!(report.text_of("flange_height_mm"), Some("17.5 mm"));
        assert_eq!(
            report.text_of("recommended_rim_width_range"),
            Some("5.00\" to 6.00\" (Ideal: 5.50\")")
        );
    }
}
