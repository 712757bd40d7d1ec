use crate::formula::domain::{AggregatedComponentRow, BomGroup, Product};
use crate::formula::services::{
    AllergenRow, BreakdownRow, ComponentsByCode, CompositionWarning, InciSummaryRow, MaterialRow,
};

/// FormulaResponse - Everything the aggregation use case computed for one product
///
/// Formatters receive it through the read model; nothing here is recomputed
/// downstream.
#[derive(Debug, Clone)]
pub struct FormulaResponse {
    pub product: Product,
    /// BOM groups, largest usage first; empty when the product has no BOM
    pub groups: Vec<BomGroup>,
    pub components_by_code: ComponentsByCode,
    /// Per (raw material × component) rows
    pub rows: Vec<AggregatedComponentRow>,
    pub material_table: Vec<MaterialRow>,
    pub breakdown: Vec<BreakdownRow>,
    pub inci_summary: Vec<InciSummaryRow>,
    pub allergens: Vec<AllergenRow>,
    /// Threshold the allergen list was filtered with
    pub allergen_threshold: f64,
    pub warnings: Vec<CompositionWarning>,
}
