//! Builder for constructing FormulaReadModel from a use case response

use super::formula_read_model::{
    AllergenRowView, AllergenTableView, BreakdownRowView, DocumentMetadataView, FormulaReadModel,
    InciRowView, MaterialRowView, ProductView, TableView,
};
use crate::application::dto::{DocumentView, FormulaResponse};
use crate::formula::domain::Product;
use crate::formula::services::{BreakdownTable, InciSummary};
use chrono::Utc;
use uuid::Uuid;

pub struct FormulaReadModelBuilder;

impl FormulaReadModelBuilder {
    /// Builds the read model with fresh generation metadata
    pub fn build(response: &FormulaResponse, view: DocumentView) -> FormulaReadModel {
        Self::build_with_metadata(response, view, Self::generate_metadata())
    }

    /// Builds the read model with the given metadata
    ///
    /// Sections outside `view` are left out.
    pub fn build_with_metadata(
        response: &FormulaResponse,
        view: DocumentView,
        metadata: DocumentMetadataView,
    ) -> FormulaReadModel {
        FormulaReadModel {
            metadata,
            product: Self::build_product(&response.product),
            view,
            material_table: view
                .includes(DocumentView::Material)
                .then(|| Self::build_material_table(response)),
            breakdown: view
                .includes(DocumentView::Breakdown)
                .then(|| Self::build_breakdown(response)),
            inci_summary: view
                .includes(DocumentView::Summary)
                .then(|| Self::build_inci_summary(response)),
            allergens: view
                .includes(DocumentView::Allergens)
                .then(|| Self::build_allergens(response)),
            warnings: response.warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Current timestamp and a random document id
    pub fn generate_metadata() -> DocumentMetadataView {
        DocumentMetadataView {
            generated_at: Utc::now().to_rfc3339(),
            document_id: format!("urn:uuid:{}", Uuid::new_v4()),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn build_product(product: &Product) -> ProductView {
        ProductView {
            product_code: product.product_code.clone(),
            display_name: product.display_name().to_string(),
            semi_product_code: product.semi_product_code.clone(),
            korean_name: product.korean_name.clone(),
            english_name: product.english_name.clone(),
            packaging_unit: product.packaging_unit.clone(),
            created_date: product.created_date.clone(),
            category: product.category.clone(),
            cosmetic_type: product.cosmetic_type.clone(),
        }
    }

    fn build_material_table(response: &FormulaResponse) -> TableView<MaterialRowView> {
        let rows: Vec<MaterialRowView> = response
            .material_table
            .iter()
            .map(|row| MaterialRowView {
                no: row.no,
                base_code: row.base_code.clone(),
                original_codes: row.original_codes.clone(),
                material_name: row.material_name.clone(),
                inci_names: row.inci_names.clone(),
                inci_names_kr: row.inci_names_kr.clone(),
                cas_numbers: row.cas_numbers.clone(),
                functions: row.functions.clone(),
                weight_percent: row.weight_percent,
            })
            .collect();
        let total_percent = rows.iter().map(|r| r.weight_percent).sum();
        TableView { rows, total_percent }
    }

    fn build_breakdown(response: &FormulaResponse) -> TableView<BreakdownRowView> {
        let rows = response
            .breakdown
            .iter()
            .map(|entry| BreakdownRowView {
                group_no: entry.group_no,
                is_first_of_group: entry.is_first_of_group,
                group_size: entry.group_size,
                base_code: entry.row.base_code.clone(),
                material_name: entry.row.material_name.clone(),
                raw_weight_percent: entry.row.raw_weight_percent,
                inci_name: entry.row.inci_name.clone(),
                ratio_in_raw: entry.row.ratio_in_raw,
                calculated_percent: entry.row.calculated_percent,
                function: entry.row.function.clone(),
                cas_number: entry.row.cas_number.clone(),
                placeholder: entry.row.placeholder,
            })
            .collect();
        TableView {
            rows,
            total_percent: BreakdownTable::total(&response.breakdown),
        }
    }

    fn build_inci_summary(response: &FormulaResponse) -> TableView<InciRowView> {
        let rows = response
            .inci_summary
            .iter()
            .map(|row| InciRowView {
                no: row.no,
                inci_name: row.inci_name.clone(),
                weight_percent: row.weight_percent,
                function: row.function.clone(),
                cas_number: row.cas_number.clone(),
            })
            .collect();
        TableView {
            rows,
            total_percent: InciSummary::total(&response.inci_summary),
        }
    }

    fn build_allergens(response: &FormulaResponse) -> AllergenTableView {
        AllergenTableView {
            threshold_percent: response.allergen_threshold,
            rows: response
                .allergens
                .iter()
                .enumerate()
                .map(|(idx, row)| AllergenRowView {
                    no: idx + 1,
                    inci_name: row.inci_name.clone(),
                    cas_number: row.cas_number.clone(),
                    weight_percent: row.weight_percent,
                })
                .collect(),
        }
    }
}
