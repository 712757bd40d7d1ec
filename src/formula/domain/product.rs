/// Product master record
///
/// The semi-finished-good code is the key used to look up the product's BOM.
/// A product without one has an empty formula.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub product_code: String,
    pub semi_product_code: Option<String>,
    pub korean_name: Option<String>,
    pub english_name: Option<String>,
    pub packaging_unit: Option<String>,
    pub created_date: Option<String>,
    pub category: Option<String>,
    pub cosmetic_type: Option<String>,
}

impl Product {
    pub fn new(product_code: impl Into<String>, semi_product_code: Option<String>) -> Self {
        Self {
            product_code: product_code.into(),
            semi_product_code,
            ..Self::default()
        }
    }

    /// Returns the semi-product code when it is present and not blank
    pub fn bom_key(&self) -> Option<&str> {
        self.semi_product_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    /// Name printed on documents: English name, then Korean name, then the product code
    pub fn display_name(&self) -> &str {
        fn non_blank(name: &Option<String>) -> Option<&str> {
            name.as_deref().filter(|n| !n.trim().is_empty())
        }
        non_blank(&self.english_name)
            .or_else(|| non_blank(&self.korean_name))
            .unwrap_or(&self.product_code)
    }
}
