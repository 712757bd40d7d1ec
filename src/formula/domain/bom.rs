/// Scale factor of BOM usage amounts: `usage_amount / 1000` is the weight percent.
pub const USAGE_SCALE: f64 = 1000.0;

/// One raw usage record of a semi-finished product as stored in the BOM master
#[derive(Debug, Clone, PartialEq)]
pub struct BomLine {
    /// Raw-material code, possibly a coded variant of a base ingredient code
    pub material_code: Option<String>,
    pub material_name: Option<String>,
    /// Usage amount scaled by 1000
    pub usage_amount: Option<i64>,
}

impl BomLine {
    pub fn new(material_code: &str, material_name: &str, usage_amount: i64) -> Self {
        Self {
            material_code: Some(material_code.to_string()),
            material_name: Some(material_name.to_string()),
            usage_amount: Some(usage_amount),
        }
    }
}

/// BOM lines collapsed onto one base ingredient code
#[derive(Debug, Clone, PartialEq)]
pub struct BomGroup {
    base_code: String,
    display_name: String,
    total_usage_amount: i64,
    original_codes: Vec<String>,
}

impl BomGroup {
    pub fn new(base_code: String, display_name: String, total_usage_amount: i64) -> Self {
        Self {
            base_code,
            display_name,
            total_usage_amount,
            original_codes: Vec::new(),
        }
    }

    pub fn with_original_codes(mut self, original_codes: Vec<String>) -> Self {
        self.original_codes = original_codes;
        self
    }

    pub(crate) fn absorb(&mut self, original_code: &str, usage_amount: i64) {
        self.total_usage_amount += usage_amount;
        if !self.original_codes.iter().any(|code| code == original_code) {
            self.original_codes.push(original_code.to_string());
        }
    }

    pub fn base_code(&self) -> &str {
        &self.base_code
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn total_usage_amount(&self) -> i64 {
        self.total_usage_amount
    }

    /// Raw codes from the BOM that normalized onto this group, in first-seen order
    pub fn original_codes(&self) -> &[String] {
        &self.original_codes
    }

    /// Share of this raw material in the final product, in percent
    pub fn raw_weight_percent(&self) -> f64 {
        self.total_usage_amount as f64 / USAGE_SCALE
    }
}
