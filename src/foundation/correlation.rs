//! Correlation value object (discretised influence strength).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CodaError;

/// Strength of influence a characteristic has on a requirement.
///
/// The CODA method restricts correlation to four canonical values; the
/// external vocabulary (QFD-style 0/1/3/9 scores, the internal fractions,
/// or qualitative labels) normalises onto them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Correlation {
    #[default]
    None,
    Weak,
    Moderate,
    Strong,
}

impl Correlation {
    /// Returns the internal correlation value used in aggregation.
    pub fn value(&self) -> f64 {
        match self {
            Correlation::None => 0.0,
            Correlation::Weak => 0.1,
            Correlation::Moderate => 0.3,
            Correlation::Strong => 0.9,
        }
    }

    /// Normalises a numeric spelling.
    ///
    /// Accepts both the 0/1/3/9 scoring scale and the internal
    /// 0.0/0.1/0.3/0.9 values.
    pub fn try_from_numeric(value: f64) -> Result<Self, CodaError> {
        if value == 0.0 {
            Ok(Correlation::None)
        } else if value == 1.0 || value == 0.1 {
            Ok(Correlation::Weak)
        } else if value == 3.0 || value == 0.3 {
            Ok(Correlation::Moderate)
        } else if value == 9.0 || value == 0.9 {
            Ok(Correlation::Strong)
        } else {
            Err(CodaError::invalid_correlation(value.to_string()))
        }
    }

    /// Returns the qualitative label.
    pub fn label(&self) -> &'static str {
        match self {
            Correlation::None => "none",
            Correlation::Weak => "weak",
            Correlation::Moderate => "moderate",
            Correlation::Strong => "strong",
        }
    }
}

impl FromStr for Correlation {
    type Err = CodaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Correlation::None),
            "weak" => Ok(Correlation::Weak),
            "moderate" | "medium" => Ok(Correlation::Moderate),
            "strong" => Ok(Correlation::Strong),
            other => Err(CodaError::invalid_correlation(other)),
        }
    }
}

impl TryFrom<f64> for Correlation {
    type Error = CodaError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Correlation::try_from_numeric(value)
    }
}

impl TryFrom<i64> for Correlation {
    type Error = CodaError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Correlation::try_from_numeric(value as f64)
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
