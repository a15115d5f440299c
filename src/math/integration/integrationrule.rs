use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::integration::integrationerror::IntegrationError;

/// Quadrature rule used to sample and sum the integrand.
///
/// Deserializes from the tags `"mid"`/`"midpoint"` and `"trap"`/`"trapezoidal"`;
/// anything else fails with `UnsupportedMethod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum IntegrationRule {
    Midpoint,
    Trapezoidal
}

impl IntegrationRule {
    /// Number of samples the rule takes for `intervals` subintervals.
    pub fn sample_count(&self, intervals: usize) -> usize {
        match self {
            IntegrationRule::Midpoint => intervals,
            IntegrationRule::Trapezoidal => intervals + 1
        }
    }
}

impl FromStr for IntegrationRule {
    type Err = IntegrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mid" | "midpoint" => Ok(IntegrationRule::Midpoint),
            "trap" | "trapezoidal" => Ok(IntegrationRule::Trapezoidal),
            _ => Err(IntegrationError::UnsupportedMethod { method: s.to_owned() })
        }
    }
}

impl TryFrom<String> for IntegrationRule {
    type Error = IntegrationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IntegrationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationRule::Midpoint => write!(f, "midpoint"),
            IntegrationRule::Trapezoidal => write!(f, "trapezoidal")
        }
    }
}
