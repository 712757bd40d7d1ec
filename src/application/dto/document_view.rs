use serde::{Deserialize, Serialize};

/// Which aggregation view(s) a document shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentView {
    /// One row per raw material
    Material,
    /// One row per raw material and INCI component
    Breakdown,
    /// One row per INCI substance
    Summary,
    /// Declarable fragrance allergens
    Allergens,
    /// Every view, in the order above
    #[default]
    All,
}

impl DocumentView {
    pub fn includes(self, view: DocumentView) -> bool {
        self == DocumentView::All || self == view
    }
}

impl std::str::FromStr for DocumentView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "material" | "materials" => Ok(DocumentView::Material),
            "breakdown" => Ok(DocumentView::Breakdown),
            "summary" | "inci" => Ok(DocumentView::Summary),
            "allergens" | "allergen" => Ok(DocumentView::Allergens),
            "all" => Ok(DocumentView::All),
            _ => Err(format!(
                "Invalid view: {}. Please specify one of: material, breakdown, summary, allergens, all",
                s
            )),
        }
    }
}

impl std::fmt::Display for DocumentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentView::Material => "material",
            DocumentView::Breakdown => "breakdown",
            DocumentView::Summary => "summary",
            DocumentView::Allergens => "allergens",
            DocumentView::All => "all",
        };
        write!(f, "{}", name)
    }
}
