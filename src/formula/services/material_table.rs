use super::ComponentsByCode;
use crate::formula::domain::{BomGroup, IngredientComponent};

/// One raw material as printed on the material-level ingredient statement
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRow {
    pub no: usize,
    pub base_code: String,
    pub original_codes: Vec<String>,
    pub material_name: String,
    /// Comma-joined English INCI names, or the material name when none are declared
    pub inci_names: String,
    /// Comma-joined Korean INCI names, or the material name when none are declared
    pub inci_names_kr: String,
    /// Distinct CAS numbers in component order
    pub cas_numbers: Vec<String>,
    /// Distinct functions in component order
    pub functions: Vec<String>,
    pub weight_percent: f64,
    pub component_count: usize,
}

/// MaterialTable view: one row per BOM group, no aggregation across groups
pub struct MaterialTable;

impl MaterialTable {
    pub fn build(groups: &[BomGroup], components_by_code: &ComponentsByCode) -> Vec<MaterialRow> {
        groups
            .iter()
            .enumerate()
            .map(|(idx, group)| {
                let components = components_by_code
                    .get(group.base_code())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                Self::row(idx + 1, group, components)
            })
            .collect()
    }

    fn row(no: usize, group: &BomGroup, components: &[IngredientComponent]) -> MaterialRow {
        let inci_names = join_or(
            components.iter().filter_map(|c| non_blank(c.inci_name_en.as_deref())),
            group.display_name(),
        );
        let inci_names_kr = join_or(
            components.iter().filter_map(|c| non_blank(c.inci_name_kr.as_deref())),
            group.display_name(),
        );

        MaterialRow {
            no,
            base_code: group.base_code().to_string(),
            original_codes: group.original_codes().to_vec(),
            material_name: group.display_name().to_string(),
            inci_names,
            inci_names_kr,
            cas_numbers: distinct(components.iter().filter_map(|c| c.cas())),
            functions: distinct(components.iter().filter_map(|c| c.function_name())),
            weight_percent: group.raw_weight_percent(),
            component_count: components.len(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn join_or<'a>(names: impl Iterator<Item = &'a str>, fallback: &str) -> String {
    let joined = names.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
