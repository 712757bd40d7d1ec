use crate::formula::domain::AggregatedComponentRow;

/// A component row tagged with its position inside its raw-material group
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    /// Running index over the whole table, starting at 0
    pub row_index: usize,
    /// 1-based number of the raw material this row belongs to
    pub group_no: usize,
    pub is_first_of_group: bool,
    /// Number of rows belonging to the same raw material
    pub group_size: usize,
    pub row: AggregatedComponentRow,
}

/// BreakdownTable view: the component rows as-is, annotated for row-spanning layouts
pub struct BreakdownTable;

impl BreakdownTable {
    /// Rows of one raw material are expected to be contiguous, which is how
    /// the weight calculator emits them.
    pub fn build(rows: &[AggregatedComponentRow]) -> Vec<BreakdownRow> {
        let mut table = Vec::with_capacity(rows.len());
        let mut group_no = 0;

        for run in rows.chunk_by(|a, b| a.base_code == b.base_code) {
            group_no += 1;
            for (offset, row) in run.iter().enumerate() {
                let row_index = table.len();
                table.push(BreakdownRow {
                    row_index,
                    group_no,
                    is_first_of_group: offset == 0,
                    group_size: run.len(),
                    row: row.clone(),
                });
            }
        }

        table
    }

    /// Sum of calculated percents over the table
    pub fn total(rows: &[BreakdownRow]) -> f64 {
        rows.iter().map(|r| r.row.calculated_percent).sum()
    }
}
