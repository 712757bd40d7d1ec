//! Row shapes of the product database tables
//!
//! Column names follow the database schema. The PostgREST client and the
//! JSON snapshot store both decode into these rows before converting to
//! domain types.

use crate::formula::domain::component::UNORDERED;
use crate::formula::domain::{BomLine, IngredientComponent, Product};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub product_code: String,
    #[serde(default)]
    pub semi_product_code: Option<String>,
    #[serde(default)]
    pub korean_name: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub packaging_unit: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cosmetic_type: Option<String>,
}

/// One line of `bom_master`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BomMasterRow {
    #[serde(default)]
    pub prdcode: Option<String>,
    #[serde(default)]
    pub materialcode: Option<String>,
    #[serde(default)]
    pub materialname: Option<String>,
    /// Usage amount on the 1000-per-percent scale; stored as a number
    #[serde(default)]
    pub usemount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentRow {
    pub ingredient_code: String,
    #[serde(default)]
    pub component_order: Option<i32>,
    #[serde(default)]
    pub inci_name_en: Option<String>,
    #[serde(default)]
    pub inci_name_kr: Option<String>,
    #[serde(default)]
    pub cas_number: Option<String>,
    #[serde(default)]
    pub composition_ratio: Option<f64>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub country_of_origin: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_code: row.product_code,
            semi_product_code: row.semi_product_code,
            korean_name: row.korean_name,
            english_name: row.english_name,
            packaging_unit: row.packaging_unit,
            created_date: row.created_date,
            category: row.category,
            cosmetic_type: row.cosmetic_type,
        }
    }
}

impl From<BomMasterRow> for BomLine {
    fn from(row: BomMasterRow) -> Self {
        BomLine {
            material_code: row.materialcode,
            material_name: row.materialname,
            // Fractional amounts are rounded to the nearest scale unit
            usage_amount: row.usemount.filter(|v| v.is_finite()).map(|v| v.round() as i64),
        }
    }
}

impl From<ComponentRow> for IngredientComponent {
    fn from(row: ComponentRow) -> Self {
        IngredientComponent {
            ingredient_code: row.ingredient_code,
            component_order: row.component_order.unwrap_or(UNORDERED),
            inci_name_en: row.inci_name_en,
            inci_name_kr: row.inci_name_kr,
            cas_number: row.cas_number,
            composition_ratio: row.composition_ratio,
            function: row.function,
            country_of_origin: row.country_of_origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_row_with_nulls() {
        let row: BomMasterRow =
            serde_json::from_str(r#"{"materialcode": null, "materialname": null, "usemount": null}"#)
                .unwrap();
        let line = BomLine::from(row);

        assert!(line.material_code.is_none());
        assert!(line.material_name.is_none());
        assert!(line.usage_amount.is_none());
    }

    #[test]
    fn test_bom_row_rounds_usage() {
        let row = BomMasterRow {
            materialcode: Some("ABC-0001".to_string()),
            usemount: Some(1234.6),
            ..Default::default()
        };
        assert_eq!(BomLine::from(row).usage_amount, Some(1235));
    }

    #[test]
    fn test_component_row_ignores_unknown_columns() {
        let row: ComponentRow = serde_json::from_str(
            r#"{"id": 7, "ingredient_code": "ABC-0001", "component_order": 2,
                "inci_name_en": "AQUA", "composition_ratio": 99.5, "updated_at": "2024-01-01"}"#,
        )
        .unwrap();
        let component = IngredientComponent::from(row);

        assert_eq!(component.component_order, 2);
        assert_eq!(component.inci_name(), Some("AQUA"));
        assert_eq!(component.composition_ratio, Some(99.5));
    }

    #[test]
    fn test_component_row_without_order_sorts_last() {
        let row: ComponentRow = serde_json::from_str(
            r#"{"ingredient_code": "ABC-0001", "component_order": null, "inci_name_en": "AQUA"}"#,
        )
        .unwrap();
        assert_eq!(IngredientComponent::from(row).component_order, UNORDERED);
    }

    #[test]
    fn test_product_row_minimal() {
        let row: ProductRow = serde_json::from_str(r#"{"product_code": "P-1"}"#).unwrap();
        let product = Product::from(row);
        assert_eq!(product.product_code, "P-1");
        assert!(product.bom_key().is_none());
    }
}
