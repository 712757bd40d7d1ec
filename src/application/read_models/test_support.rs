//! Shared fixture for read model and formatter tests

use crate::application::dto::{FormulaRequest, FormulaResponse};
use crate::formula::domain::{BomLine, IngredientComponent, Product};
use crate::formula::services::{
    AllergenFilter, BomGrouper, BreakdownTable, ComponentIndex, CompositionCheck, InciSummary,
    MaterialTable, WeightCalculator,
};

/// Water 85 %, a fragrance with Linalool at 5 % and an undeclared extract at 10 %
pub(crate) fn sample_response() -> FormulaResponse {
    let mut product = Product::new("P-1001", Some("S-1001".to_string()));
    product.korean_name = Some("수분 크림".to_string());
    product.english_name = Some("Moisture Cream".to_string());
    product.packaging_unit = Some("50 mL".to_string());
    product.created_date = Some("2024-03-01".to_string());

    let lines = vec![
        BomLine::new("ABC-0001", "Water", 85000),
        BomLine::new("EXT-0001A-1", "Green Tea Extract", 10000),
        BomLine::new("FRG-0001", "Fragrance", 5000),
    ];
    let groups = BomGrouper::group(&lines);

    let components = vec![
        IngredientComponent::new("ABC-0001", 1, "AQUA")
            .with_ratio(100.0)
            .with_cas("7732-18-5")
            .with_function("Solvent"),
        IngredientComponent::new("FRG-0001", 1, "PARFUM")
            .with_ratio(98.0)
            .with_function("Perfuming"),
        IngredientComponent::new("FRG-0001", 2, "LINALOOL")
            .with_ratio(2.0)
            .with_cas("78-70-6")
            .with_function("Perfuming"),
    ];
    let codes = groups.iter().map(|g| g.base_code().to_string()).collect();
    let components_by_code = ComponentIndex::build(components, &codes);

    let request = FormulaRequest::new("P-1001");
    let rows = WeightCalculator::compute_rows(&groups, &components_by_code, request.missing_ratio);
    let filter = AllergenFilter::new(request.allergen_threshold);

    FormulaResponse {
        material_table: MaterialTable::build(&groups, &components_by_code),
        breakdown: BreakdownTable::build(&rows),
        inci_summary: InciSummary::build(&rows),
        allergens: filter.filter(&rows),
        allergen_threshold: filter.threshold(),
        warnings: CompositionCheck::inspect(&groups, &components_by_code),
        product,
        groups,
        components_by_code,
        rows,
    }
}
