use super::ComponentsByCode;
use crate::formula::domain::BomGroup;
use std::fmt;

/// Allowed deviation of a declared composition from 100, in percentage points
pub const RATIO_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum CompositionWarning {
    /// Declared ratios of an ingredient do not add up to 100
    RatioMismatch { base_code: String, total: f64 },
    /// Ingredient has no component record; it is reported as a whole
    NoComponents { base_code: String },
}

impl fmt::Display for CompositionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionWarning::RatioMismatch { base_code, total } => write!(
                f,
                "{}: component ratios sum to {:.4} % instead of 100 %",
                base_code, total
            ),
            CompositionWarning::NoComponents { base_code } => write!(
                f,
                "{}: no INCI components recorded, listed under its material name",
                base_code
            ),
        }
    }
}

/// CompositionCheck service flagging suspicious ingredient compositions
///
/// Diagnostics only; the weight calculation does not depend on it.
pub struct CompositionCheck;

impl CompositionCheck {
    /// Checks every BOM group in order. Only present ratios are summed.
    pub fn inspect(groups: &[BomGroup], components_by_code: &ComponentsByCode) -> Vec<CompositionWarning> {
        let mut warnings = Vec::new();

        for group in groups {
            let components = components_by_code
                .get(group.base_code())
                .map(Vec::as_slice)
                .unwrap_or_default();

            if components.is_empty() {
                warnings.push(CompositionWarning::NoComponents {
                    base_code: group.base_code().to_string(),
                });
                continue;
            }

            let total: f64 = components.iter().filter_map(|c| c.composition_ratio).sum();
            if (total - 100.0).abs() > RATIO_TOLERANCE {
                warnings.push(CompositionWarning::RatioMismatch {
                    base_code: group.base_code().to_string(),
                    total,
                });
            }
        }

        warnings
    }
}
