//! # Display Reports
//!
//! A [`Report`] is the presentation form of a calculation result: an ordered
//! list of rows, each already formatted with its unit by the calculation
//! module. Front ends only lay the rows out; they never format numbers.

use serde::{Deserialize, Serialize};

use crate::measure::Measure;
use crate::tools::Tool;

/// A formatted value: a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    List(Vec<String>),
}

impl DisplayValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DisplayValue::Text(s) => Some(s),
            DisplayValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DisplayValue::List(items) => Some(items),
            DisplayValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayValue::Text(s) => write!(f, "{}", s),
            DisplayValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// One labelled output row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Stable machine key (matches the result field name)
    pub key: String,
    /// Human label
    pub label: String,
    pub value: DisplayValue,
}

/// Formatted output of one tool run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub tool: Tool,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(tool: Tool) -> Self {
        Report {
            tool,
            rows: Vec::new(),
        }
    }

    /// Add a guarded quantity formatted to `decimals` places with `unit`
    pub fn measure(
        self,
        key: &str,
        label: &str,
        value: Measure,
        decimals: usize,
        unit: &str,
    ) -> Self {
        self.text(key, label, value.format(decimals, unit))
    }

    /// Add a plain float; non-finite values fall back to their sentinel text
    pub fn number(self, key: &str, label: &str, value: f64, decimals: usize, unit: &str) -> Self {
        self.measure(key, label, Measure::from_f64(value), decimals, unit)
    }

    /// Add a free-text row (notes, labels, classifications)
    pub fn text(mut self, key: &str, label: &str, text: impl Into<String>) -> Self {
        self.rows.push(ReportRow {
            key: key.to_string(),
            label: label.to_string(),
            value: DisplayValue::Text(text.into()),
        });
        self
    }

    /// Add a list row
    pub fn list(mut self, key: &str, label: &str, items: Vec<String>) -> Self {
        self.rows.push(ReportRow {
            key: key.to_string(),
            label: label.to_string(),
            value: DisplayValue::List(items),
        });
        self
    }

    /// Look up a row value by key
    pub fn get(&self, key: &str) -> Option<&DisplayValue> {
        self.rows
            .iter()
            .find(|row| row.key == key)
            .map(|row| &row.value)
    }

    /// Look up a text row by key
    pub fn text_of(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(DisplayValue::as_text)
    }
}

/// Implemented by every calculation result.
pub trait ToReport {
    fn to_report(&self) -> Report;
}
