use crate::formula::domain::component::UNKNOWN_INCI_NAME;
use crate::formula::domain::AggregatedComponentRow;
use crate::formula::policies::{FragranceAllergens, DEFAULT_ALLERGEN_THRESHOLD};
use std::collections::HashMap;

/// A fragrance allergen that must be declared on the label
#[derive(Debug, Clone, PartialEq)]
pub struct AllergenRow {
    pub inci_name: String,
    pub cas_number: String,
    pub weight_percent: f64,
}

/// AllergenFilter view over the per-component rows
pub struct AllergenFilter {
    threshold: f64,
}

impl Default for AllergenFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ALLERGEN_THRESHOLD)
    }
}

impl AllergenFilter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Keeps rows whose CAS number is a listed allergen and whose calculated
    /// percent reaches the threshold, then merges them by CAS number
    ///
    /// The threshold applies per component row, before merging. The merged
    /// row keeps the English INCI name of the first row seen for its CAS
    /// number, or `Unknown` when that row has none.
    pub fn filter(&self, rows: &[AggregatedComponentRow]) -> Vec<AllergenRow> {
        let mut merged: Vec<AllergenRow> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let Some(cas) = row.cas_number.as_deref().map(str::trim) else {
                continue;
            };
            if !FragranceAllergens::contains(cas) || row.calculated_percent < self.threshold {
                continue;
            }

            match index.get(cas) {
                Some(&position) => merged[position].weight_percent += row.calculated_percent,
                None => {
                    index.insert(cas.to_string(), merged.len());
                    merged.push(AllergenRow {
                        inci_name: row
                            .inci_name_en
                            .clone()
                            .unwrap_or_else(|| UNKNOWN_INCI_NAME.to_string()),
                        cas_number: cas.to_string(),
                        weight_percent: row.calculated_percent,
                    });
                }
            }
        }

        merged.sort_by(|a, b| b.weight_percent.total_cmp(&a.weight_percent));
        merged
    }
}
