/// Mock implementations for testing
mod mock_bom_store;
mod mock_component_store;
mod mock_product_store;
mod mock_progress_reporter;

pub use mock_bom_store::MockBomStore;
pub use mock_component_store::MockComponentStore;
pub use mock_product_store::MockProductStore;
pub use mock_progress_reporter::MockProgressReporter;
