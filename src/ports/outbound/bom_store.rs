use crate::formula::domain::BomLine;
use crate::shared::Result;
use async_trait::async_trait;

/// BomStore port for reading bill-of-materials lines
#[async_trait]
pub trait BomStore: Send + Sync {
    /// Fetches every BOM line recorded for a semi-product code
    ///
    /// Lines come back ordered by usage amount, largest first. An unknown
    /// code yields an empty list, not an error.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be queried
    async fn find_bom_lines(&self, semi_product_code: &str) -> Result<Vec<BomLine>>;
}
