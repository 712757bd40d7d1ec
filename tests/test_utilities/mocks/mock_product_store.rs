use async_trait::async_trait;
use labdoc::prelude::*;
use std::collections::HashMap;

/// Mock ProductStore for testing
pub struct MockProductStore {
    pub products: HashMap<String, Product>,
    pub should_fail: bool,
}

impl MockProductStore {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_product(mut self, product_code: &str, semi_product_code: Option<&str>) -> Self {
        self.products.insert(
            product_code.to_string(),
            Product::new(product_code, semi_product_code.map(String::from)),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            products: HashMap::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ProductStore for MockProductStore {
    async fn find_product(&self, product_code: &str) -> Result<Option<Product>> {
        if self.should_fail {
            anyhow::bail!("Mock product store failure");
        }
        Ok(self.products.get(product_code).cloned())
    }
}
