use super::*;
use crate::formula::domain::{BomLine, IngredientComponent};
use crate::formula::policies::MissingRatioPolicy;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// Mock implementations for testing
struct MockProductStore {
    products: Vec<Product>,
}

#[async_trait::async_trait]
impl ProductStore for MockProductStore {
    async fn find_product(&self, product_code: &str) -> Result<Option<Product>> {
        Ok(self
            .products
            .iter()
            .find(|p| p.product_code == product_code)
            .cloned())
    }
}

struct MockBomStore {
    lines: HashMap<String, Vec<BomLine>>,
}

#[async_trait::async_trait]
impl BomStore for MockBomStore {
    async fn find_bom_lines(&self, semi_product_code: &str) -> Result<Vec<BomLine>> {
        Ok(self.lines.get(semi_product_code).cloned().unwrap_or_default())
    }
}

#[derive(Clone)]
struct MockComponentStore {
    components: Vec<IngredientComponent>,
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl ComponentStore for MockComponentStore {
    async fn find_components(&self, codes: &BTreeSet<String>) -> Result<Vec<IngredientComponent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .components
            .iter()
            .filter(|c| codes.contains(&c.ingredient_code))
            .cloned()
            .collect())
    }
}

struct FailingComponentStore;

#[async_trait::async_trait]
impl ComponentStore for FailingComponentStore {
    async fn find_components(&self, _codes: &BTreeSet<String>) -> Result<Vec<IngredientComponent>> {
        Err(LabdocError::StoreRequest {
            resource: "labdoc_ingredient_components".to_string(),
            details: "connection reset".to_string(),
        }
        .into())
    }
}

#[derive(Clone, Default)]
struct RecordingProgressReporter {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

fn product(code: &str, semi: Option<&str>) -> Product {
    Product::new(code, semi.map(String::from))
}

fn component_store(components: Vec<IngredientComponent>) -> MockComponentStore {
    MockComponentStore {
        components,
        calls: Arc::new(AtomicUsize::new(0)),
    }
}

fn use_case(
    products: Vec<Product>,
    lines: Vec<(&str, Vec<BomLine>)>,
    components: MockComponentStore,
    reporter: RecordingProgressReporter,
) -> AggregateFormulaUseCase<MockProductStore, MockBomStore, MockComponentStore, RecordingProgressReporter> {
    AggregateFormulaUseCase::new(
        MockProductStore { products },
        MockBomStore {
            lines: lines
                .into_iter()
                .map(|(code, lines)| (code.to_string(), lines))
                .collect(),
        },
        components,
        reporter,
    )
}

#[tokio::test]
async fn test_single_material_single_component() {
    let uc = use_case(
        vec![product("P-1", Some("S-1"))],
        vec![("S-1", vec![BomLine::new("ABC-0001", "Water", 50000)])],
        component_store(vec![
            IngredientComponent::new("ABC-0001", 1, "AQUA").with_ratio(100.0)
        ]),
        RecordingProgressReporter::default(),
    );

    let response = uc.execute(FormulaRequest::new("P-1")).await.unwrap();

    assert_eq!(response.rows.len(), 1);
    assert_eq!(response.rows[0].raw_weight_percent, 50.0);
    assert_eq!(response.rows[0].calculated_percent, 50.0);
    assert_eq!(response.inci_summary[0].inci_name, "AQUA");
}

#[tokio::test]
async fn test_variant_codes_collapse_into_one_group() {
    let uc = use_case(
        vec![product("P-1", Some("S-1"))],
        vec![(
            "S-1",
            vec![
                BomLine::new("MXD-0002B-2", "Blend", 2000),
                BomLine::new("MXD-0002A-1", "Blend", 1000),
            ],
        )],
        component_store(vec![]),
        RecordingProgressReporter::default(),
    );

    let response = uc.execute(FormulaRequest::new("P-1")).await.unwrap();

    assert_eq!(response.groups.len(), 1);
    assert_eq!(response.groups[0].base_code(), "MXD-0002");
    assert_eq!(response.groups[0].total_usage_amount(), 3000);
    assert_eq!(response.material_table[0].weight_percent, 3.0);
}

#[tokio::test]
async fn test_material_without_components_is_placeholder_and_warned() {
    let reporter = RecordingProgressReporter::default();
    let uc = use_case(
        vec![product("P-1", Some("S-1"))],
        vec![("S-1", vec![BomLine::new("XYZ-0001", "Mystery Extract", 10000)])],
        component_store(vec![]),
        reporter.clone(),
    );

    let response = uc.execute(FormulaRequest::new("P-1")).await.unwrap();

    assert_eq!(response.rows.len(), 1);
    assert_eq!(response.rows[0].calculated_percent, 10.0);
    assert_eq!(response.rows[0].inci_name, "Mystery Extract");
    assert!(response.components_by_code["XYZ-0001"].is_empty());

    let warnings = reporter.warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("XYZ-0001"));
}

#[tokio::test]
async fn test_same_inci_across_materials_is_summed() {
    let uc = use_case(
        vec![product("P-1", Some("S-1"))],
        vec![(
            "S-1",
            vec![
                BomLine::new("AAA-0001", "Glycerin 99", 2000),
                BomLine::new("BBB-0001", "Humectant Base", 5000),
            ],
        )],
        component_store(vec![
            IngredientComponent::new("AAA-0001", 1, "GLYCERIN")
                .with_ratio(100.0)
                .with_function("Humectant"),
            IngredientComponent::new("BBB-0001", 1, "Glycerin")
                .with_ratio(70.0)
                .with_function("Skin conditioning"),
            IngredientComponent::new("BBB-0001", 2, "AQUA").with_ratio(30.0),
        ]),
        RecordingProgressReporter::default(),
    );

    let response = uc.execute(FormulaRequest::new("P-1")).await.unwrap();
    let glycerin = response
        .inci_summary
        .iter()
        .find(|r| r.inci_name == "GLYCERIN")
        .unwrap();

    assert!((glycerin.weight_percent - 5.5).abs() < 1e-9);
    assert_eq!(glycerin.function.as_deref(), Some("Skin conditioning"));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let uc = use_case(
        vec![],
        vec![],
        component_store(vec![]),
        RecordingProgressReporter::default(),
    );

    let error = uc.execute(FormulaRequest::new("NOPE")).await.unwrap_err();

    match error.downcast_ref::<LabdocError>() {
        Some(LabdocError::ProductNotFound { product_code }) => assert_eq!(product_code, "NOPE"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_product_without_semi_code_has_empty_formula() {
    let components = component_store(vec![]);
    let calls = components.calls.clone();
    let uc = use_case(
        vec![product("P-1", None)],
        vec![],
        components,
        RecordingProgressReporter::default(),
    );

    let response = uc.execute(FormulaRequest::new("P-1")).await.unwrap();

    assert!(response.groups.is_empty());
    assert!(response.rows.is_empty());
    assert!(response.inci_summary.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_load_components_with_empty_set_makes_no_call() {
    let components = component_store(vec![]);
    let calls = components.calls.clone();
    let uc = use_case(vec![], vec![], components, RecordingProgressReporter::default());

    let result = uc.load_components(&BTreeSet::new()).await.unwrap();

    assert!(result.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_load_bom_unknown_code_is_empty() {
    let uc = use_case(
        vec![],
        vec![],
        component_store(vec![]),
        RecordingProgressReporter::default(),
    );
    assert!(uc.load_bom(Some("S-404")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_component_store_failure_propagates() {
    let uc = AggregateFormulaUseCase::new(
        MockProductStore {
            products: vec![product("P-1", Some("S-1"))],
        },
        MockBomStore {
            lines: HashMap::from([(
                "S-1".to_string(),
                vec![BomLine::new("ABC-0001", "Water", 1000)],
            )]),
        },
        FailingComponentStore,
        RecordingProgressReporter::default(),
    );

    let error = uc.execute(FormulaRequest::new("P-1")).await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<LabdocError>(),
        Some(LabdocError::StoreRequest { .. })
    ));
}

#[tokio::test]
async fn test_missing_ratio_policy_is_applied() {
    let uc = use_case(
        vec![product("P-1", Some("S-1"))],
        vec![("S-1", vec![BomLine::new("ABC-0001", "Water", 20000)])],
        component_store(vec![IngredientComponent::new("ABC-0001", 1, "AQUA")]),
        RecordingProgressReporter::default(),
    );

    let whole = uc.execute(FormulaRequest::new("P-1")).await.unwrap();
    assert_eq!(whole.rows[0].calculated_percent, 20.0);

    let zero = uc
        .execute(FormulaRequest::new("P-1").with_missing_ratio(MissingRatioPolicy::Zero))
        .await
        .unwrap();
    assert_eq!(zero.rows[0].calculated_percent, 0.0);
}

#[tokio::test]
async fn test_allergens_use_request_threshold() {
    let uc = use_case(
        vec![product("P-1", Some("S-1"))],
        vec![("S-1", vec![BomLine::new("FRG-0001", "Fragrance", 500)])],
        component_store(vec![
            IngredientComponent::new("FRG-0001", 1, "PARFUM").with_ratio(99.0),
            IngredientComponent::new("FRG-0001", 2, "LINALOOL")
                .with_ratio(1.0)
                .with_cas("78-70-6"),
        ]),
        RecordingProgressReporter::default(),
    );

    // Linalool lands at 0.005 %
    let default = uc.execute(FormulaRequest::new("P-1")).await.unwrap();
    assert_eq!(default.allergens.len(), 1);

    let strict = uc
        .execute(FormulaRequest::new("P-1").with_allergen_threshold(0.01))
        .await
        .unwrap();
    assert!(strict.allergens.is_empty());
    assert_eq!(strict.allergen_threshold, 0.01);
}

#[tokio::test]
async fn test_negative_threshold_is_rejected() {
    let uc = use_case(
        vec![product("P-1", Some("S-1"))],
        vec![],
        component_store(vec![]),
        RecordingProgressReporter::default(),
    );

    let error = uc
        .execute(FormulaRequest::new("P-1").with_allergen_threshold(-1.0))
        .await
        .unwrap_err();
    assert!(error.to_string().contains("allergen threshold"));
}

#[tokio::test]
async fn test_blank_product_code_is_rejected() {
    let uc = use_case(
        vec![],
        vec![],
        component_store(vec![]),
        RecordingProgressReporter::default(),
    );
    let error = uc.execute(FormulaRequest::new("   ")).await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<LabdocError>(),
        Some(LabdocError::Validation { .. })
    ));
}
