//! Motorcycle Classes for Tyre Sizing
//!
//! Typical new-tyre tread depth by intended use.

use serde::{Deserialize, Serialize};

use crate::schema::Choice;

/// Motorcycle class, as selected on the tyre form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BikeType {
    Commuter,
    #[default]
    Sports,
    Superbike,
    CruiserTouring,
    Offroad,
}

impl BikeType {
    /// All classes for UI selection
    pub const ALL: [BikeType; 5] = [
        BikeType::Commuter,
        BikeType::Sports,
        BikeType::Superbike,
        BikeType::CruiserTouring,
        BikeType::Offroad,
    ];

    /// Form code
    pub fn code(&self) -> &'static str {
        match self {
            BikeType::Commuter => "commuter",
            BikeType::Sports => "sports",
            BikeType::Superbike => "superbike",
            BikeType::CruiserTouring => "cruiser_touring",
            BikeType::Offroad => "offroad",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BikeType::Commuter => "Commuter",
            BikeType::Sports => "Sports",
            BikeType::Superbike => "Superbike",
            BikeType::CruiserTouring => "Cruiser / Touring",
            BikeType::Offroad => "Off-road",
        }
    }

    /// New-tyre tread thickness (mm)
    pub fn tread_thickness_mm(&self) -> f64 {
        match self {
            BikeType::Commuter => 7.0,
            BikeType::Sports => 8.0,
            BikeType::Superbike => 8.5,
            BikeType::CruiserTouring => 9.0,
            BikeType::Offroad => 11.0,
        }
    }
}

impl Choice for BikeType {
    const OPTIONS: &'static [&'static str] =
        &["commuter", "sports", "superbike", "cruiser_touring", "offroad"];

    fn from_code(code: &str) -> Option<Self> {
        BikeType::ALL.into_iter().find(|b| b.code() == code)
    }
}

impl std::fmt::Display for BikeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_match_codes() {
        let codes: Vec<&str> = BikeType::ALL.iter().map(BikeType::code).collect();
        assert_eq!(codes, BikeType::OPTIONS);
    }

    #[test]
    fn test_tread_depths() {
        assert_eq!(BikeType::Commuter.tread_thickness_mm(), 7.0);
        assert_eq!(BikeType::Superbike.tread_thickness_mm(), 8.5);
        assert_eq!(BikeType::CruiserTouring.tread_thickness_mm(), 9.0);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&BikeType::CruiserTouring).unwrap();
        assert_eq!(json, "\"cruiser_touring\"");
        assert_eq!(BikeType::from_code("scooter"), None);
    }
}
