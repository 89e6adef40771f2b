//! Data models for the marina application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catway type: the two dock lengths the marina offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatwayType {
    Long,
    Short,
}

impl CatwayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatwayType::Long => "long",
            CatwayType::Short => "short",
        }
    }
}

impl fmt::Display for CatwayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatwayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" => Ok(CatwayType::Long),
            "short" => Ok(CatwayType::Short),
            other => Err(format!("Invalid catway type: {}", other)),
        }
    }
}
