//! # moto_core - Motorcycle Component Design Engine
//!
//! `moto_core` is the computational heart of the motorcycle design tools:
//! thirteen sizing calculators for brakes, wheels, engine internals and the
//! transmission, with a clean JSON-friendly API shared by the CLI and the
//! web front end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Total**: Degenerate arithmetic becomes a [`Measure`] sentinel, never NaN or a panic
//! - **JSON-First**: All records implement Serialize/Deserialize
//! - **Rich Errors**: Every missing or malformed field is reported at once
//!
//! ## Quick Start
//!
//! ```rust
//! use moto_core::{FormValues, Tool};
//!
//! let form = FormValues::examples(Tool::Clutch.fields())
//!     .with("max_engine_torque", "95");
//! let report = Tool::Clutch.run(&form).unwrap();
//!
//! for row in &report.rows {
//!     println!("{}: {}", row.label, row.value);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`tools`] - Tool registry and form dispatch
//! - [`calculations`] - The calculators themselves
//! - [`schema`] - Declared input fields and form coercion
//! - [`report`] - Formatted display rows
//! - [`measure`] - Guarded numeric results
//! - [`reference`] - Chain, rim width and tyre tread tables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod measure;
pub mod reference;
pub mod report;
pub mod schema;
pub mod tools;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::CalculationItem;
pub use errors::{CalcError, CalcResult, FieldIssue};
pub use measure::Measure;
pub use report::{DisplayValue, Report, ReportRow, ToReport};
pub use schema::{FieldKind, FieldSpec, FormValues, InputSchema};
pub use tools::Tool;
