/// Fallback INCI label for a component that carries neither an English nor a Korean name
pub const UNKNOWN_INCI_NAME: &str = "Unknown";

/// Sequence position of a component whose order was not recorded; sorts after every recorded one
pub const UNORDERED: i32 = i32::MAX;

/// One declared INCI substance inside a raw-material ingredient
///
/// `composition_ratio` is the component's share within its parent
/// ingredient (0-100), not within the final product.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientComponent {
    pub ingredient_code: String,
    pub component_order: i32,
    pub inci_name_en: Option<String>,
    pub inci_name_kr: Option<String>,
    pub cas_number: Option<String>,
    pub composition_ratio: Option<f64>,
    pub function: Option<String>,
    pub country_of_origin: Option<String>,
}

impl IngredientComponent {
    pub fn new(ingredient_code: &str, component_order: i32, inci_name_en: &str) -> Self {
        Self {
            ingredient_code: ingredient_code.to_string(),
            component_order,
            inci_name_en: Some(inci_name_en.to_string()),
            ..Self::default()
        }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.composition_ratio = Some(ratio);
        self
    }

    pub fn with_cas(mut self, cas_number: &str) -> Self {
        self.cas_number = Some(cas_number.to_string());
        self
    }

    pub fn with_function(mut self, function: &str) -> Self {
        self.function = Some(function.to_string());
        self
    }

    pub fn with_korean_name(mut self, inci_name_kr: &str) -> Self {
        self.inci_name_kr = Some(inci_name_kr.to_string());
        self
    }

    /// English INCI name if present, else the Korean one
    pub fn inci_name(&self) -> Option<&str> {
        non_blank(self.inci_name_en.as_deref()).or_else(|| non_blank(self.inci_name_kr.as_deref()))
    }

    pub fn cas(&self) -> Option<&str> {
        non_blank(self.cas_number.as_deref())
    }

    pub fn function_name(&self) -> Option<&str> {
        non_blank(self.function.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
