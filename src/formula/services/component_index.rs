use crate::formula::domain::IngredientComponent;
use std::collections::{BTreeSet, HashMap};

/// Components grouped by ingredient code, each list in sequence order
pub type ComponentsByCode = HashMap<String, Vec<IngredientComponent>>;

/// ComponentIndex service grouping fetched components by their ingredient code
pub struct ComponentIndex;

impl ComponentIndex {
    /// Builds the lookup map for a set of requested base codes
    ///
    /// Every requested code gets an entry; codes without matching components
    /// map to an empty list. Components for codes that were not requested are
    /// dropped. Within a code, components are sorted by `component_order`,
    /// unrecorded orders last
    /// (stable, so equal orders keep store order).
    pub fn build(components: Vec<IngredientComponent>, codes: &BTreeSet<String>) -> ComponentsByCode {
        let mut by_code: ComponentsByCode = codes
            .iter()
            .map(|code| (code.clone(), Vec::new()))
            .collect();

        for component in components {
            if let Some(list) = by_code.get_mut(&component.ingredient_code) {
                list.push(component);
            }
        }

        for list in by_code.values_mut() {
            list.sort_by_key(|c| c.component_order);
        }

        by_code
    }
}
