use super::ComponentsByCode;
use crate::formula::domain::component::UNKNOWN_INCI_NAME;
use crate::formula::domain::{AggregatedComponentRow, BomGroup, IngredientComponent};
use crate::formula::policies::MissingRatioPolicy;

/// WeightCalculator service turning BOM groups and their components into
/// per-component weight rows
///
/// Pure arithmetic over in-memory lists; it never fails.
pub struct WeightCalculator;

impl WeightCalculator {
    /// Computes one row per (raw material × component)
    ///
    /// Rows come out in group order, and within a group in component sequence
    /// order. A group without declared components yields a single placeholder
    /// row standing for 100 % of the raw material.
    pub fn compute_rows(
        groups: &[BomGroup],
        components_by_code: &ComponentsByCode,
        policy: MissingRatioPolicy,
    ) -> Vec<AggregatedComponentRow> {
        let mut rows = Vec::new();

        for group in groups {
            let raw_weight_percent = group.raw_weight_percent();
            let components = components_by_code
                .get(group.base_code())
                .map(Vec::as_slice)
                .unwrap_or_default();

            if components.is_empty() {
                rows.push(Self::placeholder_row(group, raw_weight_percent));
                continue;
            }

            rows.extend(
                components
                    .iter()
                    .map(|component| Self::component_row(group, raw_weight_percent, component, policy)),
            );
        }

        rows
    }

    fn placeholder_row(group: &BomGroup, raw_weight_percent: f64) -> AggregatedComponentRow {
        AggregatedComponentRow {
            base_code: group.base_code().to_string(),
            material_name: group.display_name().to_string(),
            raw_weight_percent,
            inci_name: group.display_name().to_string(),
            inci_name_en: None,
            ratio_in_raw: 100.0,
            calculated_percent: raw_weight_percent,
            function: None,
            cas_number: None,
            placeholder: true,
        }
    }

    fn component_row(
        group: &BomGroup,
        raw_weight_percent: f64,
        component: &IngredientComponent,
        policy: MissingRatioPolicy,
    ) -> AggregatedComponentRow {
        let ratio_in_raw = policy.resolve(component.composition_ratio);
        AggregatedComponentRow {
            base_code: group.base_code().to_string(),
            material_name: group.display_name().to_string(),
            raw_weight_percent,
            inci_name: component
                .inci_name()
                .unwrap_or(UNKNOWN_INCI_NAME)
                .to_string(),
            inci_name_en: component
                .inci_name_en
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from),
            ratio_in_raw,
            calculated_percent: raw_weight_percent * ratio_in_raw / 100.0,
            function: component.function_name().map(String::from),
            cas_number: component.cas().map(String::from),
            placeholder: false,
        }
    }
}
