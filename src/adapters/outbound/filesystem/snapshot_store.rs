use crate::adapters::outbound::rows::{BomMasterRow, ComponentRow, ProductRow};
use crate::formula::domain::component::UNORDERED;
use crate::formula::domain::{BomLine, IngredientComponent, Product};
use crate::ports::outbound::{BomStore, ComponentStore, ProductStore};
use crate::shared::error::LabdocError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

/// Exported table contents, keyed by table name
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    labdoc_products: Vec<ProductRow>,
    #[serde(default)]
    bom_master: Vec<BomMasterRow>,
    #[serde(default)]
    labdoc_ingredient_components: Vec<ComponentRow>,
}

/// SnapshotStore adapter answering store queries from a JSON export
///
/// Implements all three store ports with the same filtering and ordering
/// the remote store applies, so documents can be produced offline.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    snapshot: Arc<Snapshot>,
}

impl SnapshotStore {
    /// Loads a snapshot file
    ///
    /// # Errors
    /// Returns `LabdocError::DataFileError` if the file cannot be read or is
    /// not a valid snapshot
    pub fn load(path: &Path) -> Result<Self> {
        let data_error = |details: String| LabdocError::DataFileError {
            path: path.to_path_buf(),
            details,
        };

        let content = read_regular_file(path, "data file").map_err(|e| data_error(e.to_string()))?;
        Self::from_json(&content).map_err(|e| data_error(e.to_string()).into())
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        Ok(Self {
            snapshot: Arc::new(snapshot),
        })
    }
}

/// Descending with missing values last
fn usage_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl ProductStore for SnapshotStore {
    async fn find_product(&self, product_code: &str) -> Result<Option<Product>> {
        Ok(self
            .snapshot
            .labdoc_products
            .iter()
            .find(|row| row.product_code == product_code)
            .cloned()
            .map(Product::from))
    }
}

#[async_trait]
impl BomStore for SnapshotStore {
    async fn find_bom_lines(&self, semi_product_code: &str) -> Result<Vec<BomLine>> {
        let mut rows: Vec<&BomMasterRow> = self
            .snapshot
            .bom_master
            .iter()
            .filter(|row| row.prdcode.as_deref() == Some(semi_product_code))
            .collect();
        rows.sort_by(|a, b| usage_desc(a.usemount, b.usemount));

        Ok(rows.into_iter().cloned().map(BomLine::from).collect())
    }
}

#[async_trait]
impl ComponentStore for SnapshotStore {
    async fn find_components(&self, ingredient_codes: &BTreeSet<String>) -> Result<Vec<IngredientComponent>> {
        let mut rows: Vec<&ComponentRow> = self
            .snapshot
            .labdoc_ingredient_components
            .iter()
            .filter(|row| ingredient_codes.contains(&row.ingredient_code))
            .collect();
        rows.sort_by(|a, b| {
            a.ingredient_code
                .cmp(&b.ingredient_code)
                .then(a.component_order.unwrap_or(UNORDERED).cmp(&b.component_order.unwrap_or(UNORDERED)))
        });

        Ok(rows.into_iter().cloned().map(IngredientComponent::from).collect())
    }
}
