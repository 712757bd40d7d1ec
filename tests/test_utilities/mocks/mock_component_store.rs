use async_trait::async_trait;
use labdoc::prelude::*;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ComponentStore for testing that counts how often it was queried
#[derive(Default, Clone)]
pub struct MockComponentStore {
    pub components: Vec<IngredientComponent>,
    pub calls: Arc<AtomicUsize>,
}

impl MockComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, component: IngredientComponent) -> Self {
        self.components.push(component);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ComponentStore for MockComponentStore {
    async fn find_components(&self, ingredient_codes: &BTreeSet<String>) -> Result<Vec<IngredientComponent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .components
            .iter()
            .filter(|c| ingredient_codes.contains(&c.ingredient_code))
            .cloned()
            .collect())
    }
}
