use crate::formula::domain::Product;
use crate::shared::Result;
use async_trait::async_trait;

/// ProductStore port for looking up finished products
///
/// Implementations must be `Send + Sync` so a store can be shared by the
/// use case across await points.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetches the product with the exact given code
    ///
    /// # Returns
    /// `None` when no product carries that code
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be queried or returns
    /// a row that cannot be decoded
    async fn find_product(&self, product_code: &str) -> Result<Option<Product>>;
}
