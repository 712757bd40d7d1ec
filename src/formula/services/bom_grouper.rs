use super::CodeNormalizer;
use crate::formula::domain::{BomGroup, BomLine};
use std::collections::HashMap;

/// BomGrouper service collapsing raw BOM lines onto base ingredient codes
pub struct BomGrouper;

impl BomGrouper {
    /// Groups BOM lines by normalized material code
    ///
    /// - Lines without a material code (missing or blank) are skipped
    /// - Usage amounts of lines sharing a base code are summed; a missing amount counts as 0
    /// - The display name is taken from the first line seen for a base code; when that
    ///   line has no name the base code is used
    /// - Groups are returned by total usage amount descending, ties in first-seen order
    pub fn group(lines: &[BomLine]) -> Vec<BomGroup> {
        let mut groups: Vec<BomGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for line in lines {
            let Some(code) = line
                .material_code
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
            else {
                continue;
            };

            let base_code = CodeNormalizer::normalize(code);
            let usage_amount = line.usage_amount.unwrap_or(0);

            let position = *index.entry(base_code.clone()).or_insert_with(|| {
                let display_name = line
                    .material_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(String::from)
                    .unwrap_or_else(|| base_code.clone());
                groups.push(BomGroup::new(base_code.clone(), display_name, 0));
                groups.len() - 1
            });

            groups[position].absorb(code, usage_amount);
        }

        // stable: equal totals keep first-seen order
        groups.sort_by(|a, b| b.total_usage_amount().cmp(&a.total_usage_amount()));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(code: Option<&str>, name: Option<&str>, amount: Option<i64>) -> BomLine {
        BomLine {
            material_code: code.map(String::from),
            material_name: name.map(String::from),
            usage_amount: amount,
        }
    }

    #[test]
    fn test_variants_are_summed() {
        let lines = vec![
            BomLine::new("MXD-0002A-1", "Blend", 1000),
            BomLine::new("MXD-0002B-2", "Blend", 2000),
        ];

        let groups = BomGrouper::group(&lines);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].base_code(), "MXD-0002");
        assert_eq!(groups[0].total_usage_amount(), 3000);
        assert_eq!(groups[0].raw_weight_percent(), 3.0);
        assert_eq!(groups[0].original_codes(), &["MXD-0002A-1", "MXD-0002B-2"]);
    }

    #[test]
    fn test_first_seen_name_wins() {
        let lines = vec![
            BomLine::new("MXD-0002A-1", "Blend lot A", 1000),
            BomLine::new("MXD-0002B-2", "Blend lot B", 2000),
        ];

        let groups = BomGrouper::group(&lines);
        assert_eq!(groups[0].display_name(), "Blend lot A");
    }

    #[test]
    fn test_missing_name_falls_back_to_base_code() {
        let lines = vec![line(Some("MXD-0002A-1"), None, Some(500))];
        let groups = BomGrouper::group(&lines);
        assert_eq!(groups[0].display_name(), "MXD-0002");
    }

    #[test]
    fn test_missing_codes_are_skipped() {
        let lines = vec![
            line(None, Some("Ghost"), Some(5000)),
            line(Some("  "), Some("Blank"), Some(5000)),
            BomLine::new("ABC-0001", "Water", 50000),
        ];

        let groups = BomGrouper::group(&lines);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].base_code(), "ABC-0001");
    }

    #[test]
    fn test_missing_amount_counts_as_zero() {
        let lines = vec![
            line(Some("ABC-0001"), Some("Water"), None),
            line(Some("ABC-0001"), Some("Water"), Some(700)),
        ];
        let groups = BomGrouper::group(&lines);
        assert_eq!(groups[0].total_usage_amount(), 700);
    }

    #[test]
    fn test_sorted_by_usage_descending_with_stable_ties() {
        let lines = vec![
            BomLine::new("AAA-0001", "First", 1000),
            BomLine::new("BBB-0001", "Second", 5000),
            BomLine::new("CCC-0001", "Third", 1000),
        ];

        let groups = BomGrouper::group(&lines);
        let codes: Vec<&str> = groups.iter().map(|g| g.base_code()).collect();
        assert_eq!(codes, vec!["BBB-0001", "AAA-0001", "CCC-0001"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(BomGrouper::group(&[]).is_empty());
    }
}
