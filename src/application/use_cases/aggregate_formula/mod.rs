use crate::application::dto::{FormulaRequest, FormulaResponse};
use crate::formula::domain::{BomGroup, Product};
use crate::formula::services::{
    AllergenFilter, BomGrouper, BreakdownTable, ComponentIndex, ComponentsByCode, CompositionCheck,
    CompositionWarning, InciSummary, MaterialTable, WeightCalculator,
};
use crate::ports::outbound::{BomStore, ComponentStore, ProductStore, ProgressReporter};
use crate::shared::error::LabdocError;
use crate::shared::Result;
use std::collections::BTreeSet;

/// AggregateFormulaUseCase - Core use case turning a product code into its
/// INCI composition tables
///
/// Fetches are sequential: the product, then its BOM, then the components
/// of the BOM's base codes. Nothing is cached between runs.
///
/// # Type Parameters
/// * `PS` - ProductStore implementation
/// * `BS` - BomStore implementation
/// * `CS` - ComponentStore implementation
/// * `PR` - ProgressReporter implementation
pub struct AggregateFormulaUseCase<PS, BS, CS, PR> {
    product_store: PS,
    bom_store: BS,
    component_store: CS,
    progress_reporter: PR,
}

impl<PS, BS, CS, PR> AggregateFormulaUseCase<PS, BS, CS, PR>
where
    PS: ProductStore,
    BS: BomStore,
    CS: ComponentStore,
    PR: ProgressReporter,
{
    pub fn new(product_store: PS, bom_store: BS, component_store: CS, progress_reporter: PR) -> Self {
        Self {
            product_store,
            bom_store,
            component_store,
            progress_reporter,
        }
    }

    /// Executes the aggregation for one product
    ///
    /// # Errors
    /// Returns `LabdocError::ProductNotFound` for an unknown product code,
    /// `LabdocError::Validation` for an unusable request, and any store
    /// failure unchanged.
    pub async fn execute(&self, request: FormulaRequest) -> Result<FormulaResponse> {
        Self::validate(&request)?;

        // Step 1: Resolve the product
        let product = self.load_product(&request.product_code).await?;

        // Step 2: Load and group the BOM
        let groups = self.load_bom(product.bom_key()).await?;

        // Step 3: Load components for every base code in the BOM
        let codes: BTreeSet<String> = groups.iter().map(|g| g.base_code().to_string()).collect();
        let components_by_code = self.load_components(&codes).await?;

        // Step 4: Diagnostics
        let warnings = CompositionCheck::inspect(&groups, &components_by_code);
        self.report_warnings(&warnings);

        // Step 5: Compute rows and views
        let rows = WeightCalculator::compute_rows(&groups, &components_by_code, request.missing_ratio);
        let allergen_filter = AllergenFilter::new(request.allergen_threshold);

        let response = FormulaResponse {
            material_table: MaterialTable::build(&groups, &components_by_code),
            breakdown: BreakdownTable::build(&rows),
            inci_summary: InciSummary::build(&rows),
            allergens: allergen_filter.filter(&rows),
            allergen_threshold: allergen_filter.threshold(),
            product,
            groups,
            components_by_code,
            rows,
            warnings,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Aggregated {} component row(s) into {} INCI substance(s), {} declarable allergen(s)",
            response.rows.len(),
            response.inci_summary.len(),
            response.allergens.len()
        ));

        Ok(response)
    }

    fn validate(request: &FormulaRequest) -> Result<()> {
        if request.product_code.trim().is_empty() {
            return Err(LabdocError::Validation {
                message: "product code must not be empty".to_string(),
            }
            .into());
        }
        if !request.allergen_threshold.is_finite() || request.allergen_threshold < 0.0 {
            return Err(LabdocError::Validation {
                message: format!(
                    "allergen threshold must be a non-negative number, got {}",
                    request.allergen_threshold
                ),
            }
            .into());
        }
        Ok(())
    }

    async fn load_product(&self, product_code: &str) -> Result<Product> {
        let product_code = product_code.trim();
        self.progress_reporter
            .report(&format!("🔍 Looking up product {}...", product_code));

        let product = self
            .product_store
            .find_product(product_code)
            .await?
            .ok_or_else(|| LabdocError::ProductNotFound {
                product_code: product_code.to_string(),
            })?;

        self.progress_reporter
            .report(&format!("✅ Found product: {}", product.display_name()));
        Ok(product)
    }

    /// Loads the BOM of a semi-product and groups it by base ingredient code
    ///
    /// A product without a semi-product code has an empty formula.
    pub async fn load_bom(&self, semi_product_code: Option<&str>) -> Result<Vec<BomGroup>> {
        let Some(semi_product_code) = semi_product_code else {
            self.progress_reporter
                .report_warning("⚠️  Product has no semi-product code; the formula is empty");
            return Ok(Vec::new());
        };

        self.progress_reporter
            .report(&format!("📖 Loading BOM for {}...", semi_product_code));

        let lines = self.bom_store.find_bom_lines(semi_product_code).await?;
        let groups = BomGrouper::group(&lines);

        self.progress_reporter.report(&format!(
            "✅ Loaded {} BOM line(s) in {} raw material(s)",
            lines.len(),
            groups.len()
        ));
        Ok(groups)
    }

    /// Loads the components of a set of base codes in one batched query
    ///
    /// Every requested code is present in the result. An empty set makes no
    /// store call at all.
    pub async fn load_components(&self, codes: &BTreeSet<String>) -> Result<ComponentsByCode> {
        if codes.is_empty() {
            return Ok(ComponentsByCode::new());
        }

        self.progress_reporter.report(&format!(
            "🧪 Fetching INCI components for {} raw material(s)...",
            codes.len()
        ));

        let components = self.component_store.find_components(codes).await?;
        self.progress_reporter
            .report_progress(components.len(), components.len(), Some("components loaded"));

        Ok(ComponentIndex::build(components, codes))
    }

    fn report_warnings(&self, warnings: &[CompositionWarning]) {
        for warning in warnings {
            self.progress_reporter
                .report_warning(&format!("⚠️  Warning: {}", warning));
        }
    }
}

#[cfg(test)]
mod tests;
