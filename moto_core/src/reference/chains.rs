//! Roller Chain Catalogue
//!
//! Pitch and minimum tensile (breaking) strength for the common motorcycle
//! final-drive chain sizes. The table is built once on first access and
//! shared read-only from then on.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::schema::Choice;

/// Motorcycle chain size designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ChainType {
    /// 520 - 5/8" pitch, 1/4" roller width
    #[default]
    #[serde(rename = "520")]
    Chain520,
    /// 525 - 5/8" pitch, 5/16" roller width
    #[serde(rename = "525")]
    Chain525,
    /// 530 - 5/8" pitch, 3/8" roller width
    #[serde(rename = "530")]
    Chain530,
}

impl ChainType {
    /// All chain sizes for UI selection
    pub const ALL: [ChainType; 3] = [ChainType::Chain520, ChainType::Chain525, ChainType::Chain530];

    /// Catalogue code ("520", "525", "530")
    pub fn code(&self) -> &'static str {
        match self {
            ChainType::Chain520 => "520",
            ChainType::Chain525 => "525",
            ChainType::Chain530 => "530",
        }
    }
}

impl Choice for ChainType {
    const OPTIONS: &'static [&'static str] = &["520", "525", "530"];

    fn from_code(code: &str) -> Option<Self> {
        ChainType::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for ChainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Catalogue entry for one chain size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainSpec {
    /// Pitch (mm)
    pub pitch_mm: f64,
    /// Minimum breaking strength (N)
    pub breaking_strength_n: f64,
}

static CHAIN_TABLE: Lazy<BTreeMap<ChainType, ChainSpec>> = Lazy::new(|| {
    BTreeMap::from([
        (
            ChainType::Chain520,
            ChainSpec {
                pitch_mm: 15.875,
                breaking_strength_n: 35_000.0,
            },
        ),
        (
            ChainType::Chain525,
            ChainSpec {
                pitch_mm: 15.875,
                breaking_strength_n: 40_000.0,
            },
        ),
        (
            ChainType::Chain530,
            ChainSpec {
                pitch_mm: 15.875,
                breaking_strength_n: 45_000.0,
            },
        ),
    ])
});

impl ChainSpec {
    /// Look up the catalogue entry for a chain size.
    pub fn lookup(chain: ChainType) -> ChainSpec {
        match CHAIN_TABLE.get(&chain) {
            Some(spec) => *spec,
            // every ChainType variant has an entry
            None => unreachable!("chain table is missing {}", chain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chain_has_entry() {
        for chain in ChainType::ALL {
            let spec = ChainSpec::lookup(chain);
            assert_eq!(spec.pitch_mm, 15.875);
        }
    }

    #[test]
    fn test_strength_increases_with_size() {
        let s520 = ChainSpec::lookup(ChainType::Chain520).breaking_strength_n;
        let s525 = ChainSpec::lookup(ChainType::Chain525).breaking_strength_n;
        let s530 = ChainSpec::lookup(ChainType::Chain530).breaking_strength_n;
        assert_eq!(s520, 35_000.0);
        assert!(s520 < s525 && s525 < s530);
    }

    #[test]
    fn test_codes() {
        assert_eq!(ChainType::from_code("530"), Some(ChainType::Chain530));
        assert_eq!(ChainType::from_code("428"), None);
        let json = serde_json::to_string(&ChainType::Chain525).unwrap();
        assert_eq!(json, "\"525\"");
    }
}
