use std::fmt;
use std::str::FromStr;

/// MissingRatioPolicy decides what share a component without a recorded
/// composition ratio gets inside its raw material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRatioPolicy {
    /// A missing ratio counts as 100 %
    #[default]
    AssumeWhole,
    /// A missing ratio counts as 0 %
    Zero,
}

impl MissingRatioPolicy {
    /// Returns the ratio (in percent) to use for a component
    pub fn resolve(self, ratio: Option<f64>) -> f64 {
        match (ratio, self) {
            (Some(ratio), _) => ratio,
            (None, MissingRatioPolicy::AssumeWhole) => 100.0,
            (None, MissingRatioPolicy::Zero) => 0.0,
        }
    }
}

impl FromStr for MissingRatioPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "assume-whole" | "whole" | "100" => Ok(MissingRatioPolicy::AssumeWhole),
            "zero" | "0" => Ok(MissingRatioPolicy::Zero),
            _ => Err(format!(
                "Invalid missing ratio policy: {}. Please specify 'assume-whole' or 'zero'",
                s
            )),
        }
    }
}

impl fmt::Display for MissingRatioPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRatioPolicy::AssumeWhole => write!(f, "assume-whole"),
            MissingRatioPolicy::Zero => write!(f, "zero"),
        }
    }
}
