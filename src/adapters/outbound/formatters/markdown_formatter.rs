use crate::application::read_models::{
    AllergenTableView, BreakdownRowView, FormulaReadModel, InciRowView, MaterialRowView, ProductView,
    TableView,
};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// Weight percents at or above this value print as `To. 100`
const TO_100_THRESHOLD: f64 = 99.99;

const MATERIAL_DECIMALS: usize = 4;
const BREAKDOWN_DECIMALS: usize = 5;
const SUMMARY_DECIMALS: usize = 6;
const ALLERGEN_DECIMALS: usize = 5;

const MATERIAL_TABLE_HEADER: &str =
    "| No. | Code | Raw Material | INCI Name | Wt % | CAS No. | Function |\n";
const MATERIAL_TABLE_SEPARATOR: &str =
    "|----:|------|--------------|-----------|-----:|---------|----------|\n";

const BREAKDOWN_TABLE_HEADER: &str =
    "| No. | Raw Material | Raw Wt % | INCI Name | Ratio in Raw % | Wt % | CAS No. | Function |\n";
const BREAKDOWN_TABLE_SEPARATOR: &str =
    "|----:|--------------|---------:|-----------|---------------:|-----:|---------|----------|\n";

const SUMMARY_TABLE_HEADER: &str = "| No. | INCI Name | Wt % | Function | CAS No. |\n";
const SUMMARY_TABLE_SEPARATOR: &str = "|----:|-----------|-----:|----------|---------|\n";

const ALLERGEN_TABLE_HEADER: &str = "| No. | INCI Name | CAS No. | Wt % |\n";
const ALLERGEN_TABLE_SEPARATOR: &str = "|----:|-----------|---------|-----:|\n";

/// MarkdownFormatter adapter rendering a formula document as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn optional_cell(value: Option<&str>) -> String {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Self::escape_cell(v),
            None => "-".to_string(),
        }
    }

    fn list_cell(values: &[String]) -> String {
        if values.is_empty() {
            "-".to_string()
        } else {
            Self::escape_cell(&values.join(", "))
        }
    }

    /// Fixed-precision percent
    fn percent(value: f64, decimals: usize) -> String {
        format!("{:.*}", decimals, value)
    }

    /// Fixed-precision percent, or `To. 100` for a whole-formula share
    fn weight(value: f64, decimals: usize) -> String {
        if value >= TO_100_THRESHOLD {
            "To. 100".to_string()
        } else {
            Self::percent(value, decimals)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, product: &ProductView) {
        output.push_str(&format!(
            "# Formula Composition: {}\n\n",
            Self::escape_cell(&product.display_name)
        ));

        output.push_str("| Field | Value |\n|-------|-------|\n");
        let fields = [
            ("Product Code", Some(product.product_code.as_str())),
            ("Korean Name", product.korean_name.as_deref()),
            ("English Name", product.english_name.as_deref()),
            ("Semi-Product Code", product.semi_product_code.as_deref()),
            ("Packaging Unit", product.packaging_unit.as_deref()),
            ("Created", product.created_date.as_deref()),
        ];
        for (label, value) in fields {
            output.push_str(&format!("| {} | {} |\n", label, Self::optional_cell(value)));
        }
        output.push('\n');
    }

    fn render_material_table(&self, output: &mut String, table: &TableView<MaterialRowView>) {
        output.push_str("## Raw Material Composition\n\n");
        if table.rows.is_empty() {
            output.push_str("*No raw materials recorded*\n\n");
            return;
        }

        output.push_str(MATERIAL_TABLE_HEADER);
        output.push_str(MATERIAL_TABLE_SEPARATOR);
        for row in &table.rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                row.no,
                Self::escape_cell(&row.base_code),
                Self::escape_cell(&row.material_name),
                Self::escape_cell(&row.inci_names),
                Self::weight(row.weight_percent, MATERIAL_DECIMALS),
                Self::list_cell(&row.cas_numbers),
                Self::list_cell(&row.functions),
            ));
        }
        output.push_str(&format!(
            "| | **Total** | | | **{}** | | |\n\n",
            Self::percent(table.total_percent, MATERIAL_DECIMALS)
        ));
    }

    /// Raw-material columns are printed on the first row of each group only
    fn render_breakdown(&self, output: &mut String, table: &TableView<BreakdownRowView>) {
        output.push_str("## Component Breakdown\n\n");
        if table.rows.is_empty() {
            output.push_str("*No components*\n\n");
            return;
        }

        output.push_str(BREAKDOWN_TABLE_HEADER);
        output.push_str(BREAKDOWN_TABLE_SEPARATOR);
        for row in &table.rows {
            let (no, material, raw_weight) = if row.is_first_of_group {
                (
                    row.group_no.to_string(),
                    Self::escape_cell(&row.material_name),
                    Self::weight(row.raw_weight_percent, BREAKDOWN_DECIMALS),
                )
            } else {
                (String::new(), String::new(), String::new())
            };

            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                no,
                material,
                raw_weight,
                Self::escape_cell(&row.inci_name),
                Self::percent(row.ratio_in_raw, 2),
                Self::weight(row.calculated_percent, BREAKDOWN_DECIMALS),
                Self::optional_cell(row.cas_number.as_deref()),
                Self::optional_cell(row.function.as_deref()),
            ));
        }
        output.push_str(&format!(
            "| | **Total** | | | | **{}** | | |\n\n",
            Self::percent(table.total_percent, BREAKDOWN_DECIMALS)
        ));
    }

    fn render_inci_summary(&self, output: &mut String, table: &TableView<InciRowView>) {
        output.push_str("## INCI Summary\n\n");
        if table.rows.is_empty() {
            output.push_str("*No ingredients*\n\n");
            return;
        }

        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        for row in &table.rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                row.no,
                Self::escape_cell(&row.inci_name),
                Self::percent(row.weight_percent, SUMMARY_DECIMALS),
                Self::optional_cell(row.function.as_deref()),
                Self::optional_cell(row.cas_number.as_deref()),
            ));
        }
        output.push_str(&format!(
            "| | **Total** | **{}** | | |\n\n",
            Self::percent(table.total_percent, SUMMARY_DECIMALS)
        ));
    }

    fn render_allergens(&self, output: &mut String, table: &AllergenTableView) {
        output.push_str("## Fragrance Allergens\n\n");
        output.push_str(&format!(
            "Listed fragrance allergens present at or above {} %.\n\n",
            table.threshold_percent
        ));
        if table.rows.is_empty() {
            output.push_str("*No fragrance allergens above the threshold*\n\n");
            return;
        }

        output.push_str(ALLERGEN_TABLE_HEADER);
        output.push_str(ALLERGEN_TABLE_SEPARATOR);
        for row in &table.rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                row.no,
                Self::escape_cell(&row.inci_name),
                Self::escape_cell(&row.cas_number),
                Self::percent(row.weight_percent, ALLERGEN_DECIMALS),
            ));
        }
        output.push('\n');
    }

    fn render_notes(&self, output: &mut String, warnings: &[String]) {
        if warnings.is_empty() {
            return;
        }
        output.push_str("## Notes\n\n");
        for warning in warnings {
            output.push_str(&format!("- {}\n", warning));
        }
        output.push('\n');
    }
}

impl DocumentFormatter for MarkdownFormatter {
    fn format(&self, model: &FormulaReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.product);
        if let Some(table) = &model.material_table {
            self.render_material_table(&mut output, table);
        }
        if let Some(table) = &model.breakdown {
            self.render_breakdown(&mut output, table);
        }
        if let Some(table) = &model.inci_summary {
            self.render_inci_summary(&mut output, table);
        }
        if let Some(table) = &model.allergens {
            self.render_allergens(&mut output, table);
        }
        self.render_notes(&mut output, &model.warnings);

        Ok(output)
    }
}
