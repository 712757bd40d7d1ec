//! Formula read model for document rendering
//!
//! A denormalized, serializable snapshot of one aggregation run. Every
//! formatter renders from this struct alone.

use crate::application::dto::DocumentView;
use serde::Serialize;

/// Main read model for a formula document
#[derive(Debug, Clone, Serialize)]
pub struct FormulaReadModel {
    pub metadata: DocumentMetadataView,
    pub product: ProductView,
    /// Which sections were requested
    pub view: DocumentView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_table: Option<TableView<MaterialRowView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<TableView<BreakdownRowView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inci_summary: Option<TableView<InciRowView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<AllergenTableView>,
    pub warnings: Vec<String>,
}

/// Generation metadata
#[derive(Debug, Clone, Serialize)]
pub struct DocumentMetadataView {
    /// RFC 3339 timestamp of generation
    pub generated_at: String,
    /// Unique document identifier (`urn:uuid:...`)
    pub document_id: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// Product header fields
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub product_code: String,
    /// Title printed on documents: English name, then Korean name, then the product code
    pub display_name: String,
    pub semi_product_code: Option<String>,
    pub korean_name: Option<String>,
    pub english_name: Option<String>,
    pub packaging_unit: Option<String>,
    pub created_date: Option<String>,
    pub category: Option<String>,
    pub cosmetic_type: Option<String>,
}

/// Rows plus the sum of their weight column
#[derive(Debug, Clone, Serialize)]
pub struct TableView<R> {
    pub rows: Vec<R>,
    pub total_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaterialRowView {
    pub no: usize,
    pub base_code: String,
    pub original_codes: Vec<String>,
    pub material_name: String,
    pub inci_names: String,
    pub inci_names_kr: String,
    pub cas_numbers: Vec<String>,
    pub functions: Vec<String>,
    pub weight_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRowView {
    pub group_no: usize,
    pub is_first_of_group: bool,
    pub group_size: usize,
    pub base_code: String,
    pub material_name: String,
    pub raw_weight_percent: f64,
    pub inci_name: String,
    pub ratio_in_raw: f64,
    pub calculated_percent: f64,
    pub function: Option<String>,
    pub cas_number: Option<String>,
    /// True when the raw material has no recorded components
    pub placeholder: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct InciRowView {
    pub no: usize,
    pub inci_name: String,
    pub weight_percent: f64,
    pub function: Option<String>,
    pub cas_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllergenTableView {
    pub threshold_percent: f64,
    pub rows: Vec<AllergenRowView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllergenRowView {
    pub no: usize,
    pub inci_name: String,
    pub cas_number: String,
    pub weight_percent: f64,
}
