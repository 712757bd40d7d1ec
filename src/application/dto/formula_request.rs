use crate::formula::policies::{MissingRatioPolicy, DEFAULT_ALLERGEN_THRESHOLD};

/// FormulaRequest - Internal request DTO for the formula aggregation use case
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaRequest {
    /// Finished-product code to document
    pub product_code: String,
    /// How components without a declared ratio are weighted
    pub missing_ratio: MissingRatioPolicy,
    /// Minimum calculated percent for a fragrance allergen to be listed
    pub allergen_threshold: f64,
}

impl FormulaRequest {
    pub fn new(product_code: impl Into<String>) -> Self {
        Self {
            product_code: product_code.into(),
            missing_ratio: MissingRatioPolicy::default(),
            allergen_threshold: DEFAULT_ALLERGEN_THRESHOLD,
        }
    }

    pub fn with_missing_ratio(mut self, policy: MissingRatioPolicy) -> Self {
        self.missing_ratio = policy;
        self
    }

    pub fn with_allergen_threshold(mut self, threshold: f64) -> Self {
        self.allergen_threshold = threshold;
        self
    }
}
