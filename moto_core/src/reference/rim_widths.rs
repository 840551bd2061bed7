//! Tyre-to-Rim Width Recommendations
//!
//! Permitted and design (ideal) rim widths, in inches, for each nominal
//! motorcycle tyre section-width band. Widths outside every band are not
//! covered by the table.

use serde::{Deserialize, Serialize};

/// Rim width recommendation for one tyre section-width band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RimWidthRange {
    /// Narrowest tyre width in the band (mm, inclusive)
    pub tyre_min_mm: u32,
    /// Widest tyre width in the band (mm, inclusive)
    pub tyre_max_mm: u32,
    /// Narrowest permitted rim (in)
    pub min_in: f64,
    /// Design rim width (in)
    pub ideal_in: f64,
    /// Widest permitted rim (in)
    pub max_in: f64,
}

const fn band(
    tyre_min_mm: u32,
    tyre_max_mm: u32,
    min_in: f64,
    ideal_in: f64,
    max_in: f64,
) -> RimWidthRange {
    RimWidthRange {
        tyre_min_mm,
        tyre_max_mm,
        min_in,
        ideal_in,
        max_in,
    }
}

/// The six standard bands
pub const RIM_WIDTH_TABLE: [RimWidthRange; 6] = [
    band(90, 100, 2.15, 2.50, 2.75),
    band(110, 120, 3.00, 3.50, 3.75),
    band(130, 140, 3.50, 4.00, 4.50),
    band(150, 160, 4.25, 4.50, 5.00),
    band(170, 180, 5.00, 5.50, 6.00),
    band(190, 200, 5.50, 6.00, 6.50),
];

impl RimWidthRange {
    /// Find the band containing a tyre section width.
    pub fn for_tyre_width(tyre_width_mm: u32) -> Option<RimWidthRange> {
        RIM_WIDTH_TABLE
            .iter()
            .find(|b| (b.tyre_min_mm..=b.tyre_max_mm).contains(&tyre_width_mm))
            .copied()
    }

    /// True when `width_in` lies in the permitted range (inclusive)
    pub fn permits(&self, width_in: f64) -> bool {
        self.min_in <= width_in && width_in <= self.max_in
    }

    /// True when `width_in` is the design width
    pub fn is_ideal(&self, width_in: f64) -> bool {
        (width_in - self.ideal_in).abs() < 1e-9
    }

    /// Display text, e.g. `3.00" to 3.75" (Ideal: 3.50")`
    pub fn describe(&self) -> String {
        format!("{:.2}\" to {:.2}\" (Ideal: {:.2}\")", self.min_in, self.max_in, self.ideal_in)
    }
}
