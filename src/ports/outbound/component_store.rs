use crate::formula::domain::IngredientComponent;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// ComponentStore port for reading the INCI breakdown of raw materials
#[async_trait]
pub trait ComponentStore: Send + Sync {
    /// Fetches the components of every ingredient code in the set
    ///
    /// Results are ordered by ingredient code, then by component sequence.
    /// Codes without components simply contribute nothing.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be queried
    async fn find_components(&self, ingredient_codes: &BTreeSet<String>) -> Result<Vec<IngredientComponent>>;

    /// Fetches the components of a single ingredient code, in sequence order
    async fn find_components_for(&self, ingredient_code: &str) -> Result<Vec<IngredientComponent>> {
        let codes = BTreeSet::from([ingredient_code.to_string()]);
        self.find_components(&codes).await
    }
}
