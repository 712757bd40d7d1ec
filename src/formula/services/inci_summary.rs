use crate::formula::domain::AggregatedComponentRow;
use std::collections::HashMap;

/// One INCI substance consolidated across every raw material of the product
#[derive(Debug, Clone, PartialEq)]
pub struct InciSummaryRow {
    pub no: usize,
    /// Upper-cased INCI name
    pub inci_name: String,
    pub weight_percent: f64,
    pub function: Option<String>,
    pub cas_number: Option<String>,
    /// Number of component rows merged into this one
    pub contributor_count: usize,
}

struct Accumulator {
    inci_name: String,
    weight_percent: f64,
    dominant_percent: f64,
    function: Option<String>,
    cas_number: Option<String>,
    contributor_count: usize,
}

/// InciSummary view: component rows collapsed by case-folded INCI name
pub struct InciSummary;

impl InciSummary {
    /// Builds the consolidated INCI table
    ///
    /// Calculated percents are summed per upper-cased, trimmed INCI name.
    /// Function and CAS number come from the dominant contributor, the single
    /// row with the largest calculated percent (the first one on ties). The
    /// result is sorted by summed percent descending and numbered from 1.
    pub fn build(rows: &[AggregatedComponentRow]) -> Vec<InciSummaryRow> {
        let mut entries: Vec<Accumulator> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let key = row.inci_name.trim().to_uppercase();

            match index.get(&key) {
                Some(&position) => {
                    let entry = &mut entries[position];
                    entry.weight_percent += row.calculated_percent;
                    entry.contributor_count += 1;
                    if row.calculated_percent > entry.dominant_percent {
                        entry.dominant_percent = row.calculated_percent;
                        entry.function = row.function.clone();
                        entry.cas_number = row.cas_number.clone();
                    }
                }
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push(Accumulator {
                        inci_name: key,
                        weight_percent: row.calculated_percent,
                        dominant_percent: row.calculated_percent,
                        function: row.function.clone(),
                        cas_number: row.cas_number.clone(),
                        contributor_count: 1,
                    });
                }
            }
        }

        entries.sort_by(|a, b| b.weight_percent.total_cmp(&a.weight_percent));

        entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| InciSummaryRow {
                no: idx + 1,
                inci_name: entry.inci_name,
                weight_percent: entry.weight_percent,
                function: entry.function,
                cas_number: entry.cas_number,
                contributor_count: entry.contributor_count,
            })
            .collect()
    }

    /// Sum of weight percents over the summary
    pub fn total(rows: &[InciSummaryRow]) -> f64 {
        rows.iter().map(|r| r.weight_percent).sum()
    }
}
