/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the product database, the console and the output destination.
pub mod bom_store;
pub mod component_store;
pub mod formatter;
pub mod output_presenter;
pub mod product_store;
pub mod progress_reporter;

pub use bom_store::BomStore;
pub use component_store::ComponentStore;
pub use formatter::DocumentFormatter;
pub use output_presenter::OutputPresenter;
pub use product_store::ProductStore;
pub use progress_reporter::ProgressReporter;
