use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Physical maximum for any single dimension, expressed in centimetres.
pub const MAX_DIMENSION_CM: u32 = 1200;
pub const MIN_DIMENSION: u32 = 1;
pub const MIN_WEIGHT_KG: u32 = 1;
pub const MAX_WEIGHT_KG: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Centimetres,
    Millimetres,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Centimetres => "centimetres",
            Units::Millimetres => "millimetres",
        }
    }

    /// Inclusive upper bound for width, height and depth in this unit.
    pub fn max_dimension(self) -> u32 {
        match self {
            Units::Centimetres => MAX_DIMENSION_CM,
            Units::Millimetres => MAX_DIMENSION_CM * 10,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown units '{0}', expected centimetres or millimetres")]
pub struct ParseUnitsError(pub String);

impl std::str::FromStr for Units {
    type Err = ParseUnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centimetres" | "cm" => Ok(Units::Centimetres),
            "millimetres" | "mm" => Ok(Units::Millimetres),
            _ => Err(ParseUnitsError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_names_and_abbreviations() {
        assert_eq!("centimetres".parse::<Units>(), Ok(Units::Centimetres));
        assert_eq!(" MM ".parse::<Units>(), Ok(Units::Millimetres));
        assert!("inches".parse::<Units>().is_err());
    }

    #[test]
    fn millimetre_bound_is_ten_times_centimetre_bound() {
        assert_eq!(Units::Centimetres.max_dimension(), 1200);
        assert_eq!(Units::Millimetres.max_dimension(), 12000);
        assert_eq!(Units::default(), Units::Centimetres);
    }
}
