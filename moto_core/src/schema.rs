//! # Input Schemas
//!
//! Every calculation input declares its fields explicitly as a list of
//! [`FieldSpec`]s and reads itself from untyped request data through a
//! [`FieldReader`]. The reader coerces each field eagerly and keeps going
//! after a failure, so a bad submission is reported once with every
//! missing or malformed field listed.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::calculations::clutch::ClutchInput;
//! use moto_core::schema::{FormValues, InputSchema};
//!
//! let form: FormValues = [
//!     ("max_engine_torque", "60"),
//!     ("outer_diameter", "140"),
//!     ("friction_coefficient", "0.35"),
//!     ("allowable_surface_pressure", "0.25"),
//!     ("safety_factor", "1.3"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let input = ClutchInput::from_form(&form).unwrap();
//! assert_eq!(input.outer_diameter, 140.0);
//!
//! let broken: FormValues = [("outer_diameter", "wide")].into_iter().collect();
//! let err = ClutchInput::from_form(&broken).unwrap_err();
//! assert_eq!(err.issues().len(), 5);
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, FieldIssue};

/// Declared type of an input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum FieldKind {
    /// Real number
    Float,
    /// Non-negative whole number
    Int,
    /// One of a fixed set of codes
    Choice(&'static [&'static str]),
}

/// One entry of an input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Form field name
    pub name: &'static str,
    /// Human label
    pub label: &'static str,
    /// Unit shown next to the field (empty when dimensionless)
    pub unit: &'static str,
    pub kind: FieldKind,
    /// Typical value, used as a placeholder and in sample forms
    pub example: &'static str,
}

impl FieldSpec {
    pub const fn float(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        example: &'static str,
    ) -> Self {
        FieldSpec {
            name,
            label,
            unit,
            kind: FieldKind::Float,
            example,
        }
    }

    pub const fn int(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        example: &'static str,
    ) -> Self {
        FieldSpec {
            name,
            label,
            unit,
            kind: FieldKind::Int,
            example,
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        example: &'static str,
    ) -> Self {
        FieldSpec {
            name,
            label,
            unit: "",
            kind: FieldKind::Choice(options),
            example,
        }
    }
}

/// A categorical input value chosen from a fixed code list.
pub trait Choice: Sized + Copy + Default {
    /// Accepted codes, in display order
    const OPTIONS: &'static [&'static str];

    fn from_code(code: &str) -> Option<Self>;
}

/// Flat string-valued request data (form fields or CLI `key=value` pairs).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        FormValues(BTreeMap::new())
    }

    /// Sample form filled with each field's example value
    pub fn examples(fields: &[FieldSpec]) -> Self {
        fields.iter().map(|f| (f.name, f.example)).collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormValues(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for FormValues {
    fn from(map: BTreeMap<String, String>) -> Self {
        FormValues(map)
    }
}

impl From<HashMap<String, String>> for FormValues {
    fn from(map: HashMap<String, String>) -> Self {
        FormValues(map.into_iter().collect())
    }
}

/// Coerces fields out of a [`FormValues`], accumulating issues.
///
/// Each accessor returns a placeholder when the field is bad so the caller
/// can keep building the record; [`FieldReader::finish`] then discards the
/// record if anything went wrong.
pub struct FieldReader<'a> {
    form: &'a FormValues,
    issues: Vec<FieldIssue>,
}

impl<'a> FieldReader<'a> {
    pub fn new(form: &'a FormValues) -> Self {
        FieldReader {
            form,
            issues: Vec::new(),
        }
    }

    fn raw(&mut self, name: &str) -> Option<&'a str> {
        let form = self.form;
        match form.get(name).map(str::trim) {
            Some(value) if !value.is_empty() => Some(value),
            _ => {
                self.issues.push(FieldIssue::missing(name));
                None
            }
        }
    }

    /// Read a finite real number
    pub fn float(&mut self, name: &str) -> f64 {
        let Some(raw) = self.raw(name) else {
            return 0.0;
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            Ok(_) => {
                self.issues.push(FieldIssue::malformed(name, raw, "must be a finite number"));
                0.0
            }
            Err(_) => {
                self.issues.push(FieldIssue::malformed(name, raw, "expected a number"));
                0.0
            }
        }
    }

    /// Read a non-negative whole number
    pub fn int(&mut self, name: &str) -> u32 {
        let Some(raw) = self.raw(name) else {
            return 0;
        };
        match raw.parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                self.issues.push(FieldIssue::malformed(name, raw, "expected a whole number"));
                0
            }
        }
    }

    /// Read a whole number no greater than `max`
    pub fn int_at_most(&mut self, name: &str, max: u32) -> u32 {
        let value = self.int(name);
        if value > max {
            let reason = format!("must be at most {}", max);
            self.issues.push(FieldIssue::malformed(name, value.to_string(), reason));
            return 0;
        }
        value
    }

    /// Read a categorical code
    pub fn choice<T: Choice>(&mut self, name: &str) -> T {
        let Some(raw) = self.raw(name) else {
            return T::default();
        };
        match T::from_code(raw) {
            Some(value) => value,
            None => {
                let reason = format!("expected one of: {}", T::OPTIONS.join(", "));
                self.issues.push(FieldIssue::malformed(name, raw, reason));
                T::default()
            }
        }
    }

    /// Hand back the record if every field coerced cleanly.
    pub fn finish<T>(self, record: T) -> CalcResult<T> {
        if self.issues.is_empty() {
            Ok(record)
        } else {
            Err(CalcError::invalid_input(self.issues))
        }
    }
}

/// Implemented by every calculation input record.
pub trait InputSchema: Sized {
    /// Declared fields, in form order
    const FIELDS: &'static [FieldSpec];

    /// Pull every field out of the reader (errors are collected by the reader)
    fn read(reader: &mut FieldReader<'_>) -> Self;

    /// Build the record from untyped request data
    fn from_form(form: &FormValues) -> CalcResult<Self> {
        let mut reader = FieldReader::new(form);
        let record = Self::read(&mut reader);
        reader.finish(record)
    }
}
