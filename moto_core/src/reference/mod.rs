//! # Reference Data
//!
//! Fixed catalogue data the calculators look up: roller chain sizes,
//! tyre-to-rim width recommendations and tread depth by motorcycle class.
//! All tables are immutable; the chain table is built once on first use.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::reference::{ChainType, ChainSpec, BikeType, RimWidthRange};
//!
//! let spec = ChainSpec::lookup(ChainType::Chain525);
//! assert_eq!(spec.pitch_mm, 15.875);
//!
//! assert_eq!(BikeType::Offroad.tread_thickness_mm(), 11.0);
//!
//! let range = RimWidthRange::for_tyre_width(120).unwrap();
//! assert_eq!(range.ideal_in, 3.50);
//! ```

pub mod chains;
pub mod rim_widths;
pub mod tyres;

pub use chains::{ChainSpec, ChainType};
pub use rim_widths::RimWidthRange;
pub use tyres::BikeType;
