use async_trait::async_trait;
use labdoc::prelude::*;
use std::collections::HashMap;

/// Mock BomStore for testing
///
/// Lines are returned in insertion order; the use case sorts groups itself.
pub struct MockBomStore {
    pub lines: HashMap<String, Vec<BomLine>>,
}

impl MockBomStore {
    pub fn new() -> Self {
        Self {
            lines: HashMap::new(),
        }
    }

    pub fn with_line(mut self, semi_product_code: &str, material_code: &str, material_name: &str, usage_amount: i64) -> Self {
        self.lines
            .entry(semi_product_code.to_string())
            .or_default()
            .push(BomLine::new(material_code, material_name, usage_amount));
        self
    }
}

#[async_trait]
impl BomStore for MockBomStore {
    async fn find_bom_lines(&self, semi_product_code: &str) -> Result<Vec<BomLine>> {
        Ok(self.lines.get(semi_product_code).cloned().unwrap_or_default())
    }
}
