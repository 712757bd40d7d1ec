use crate::application::read_models::FormulaReadModel;
use crate::shared::Result;

/// DocumentFormatter port for rendering a formula document
///
/// Each implementation lays out the same read model in one output format.
pub trait DocumentFormatter {
    /// Renders the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &FormulaReadModel) -> Result<String>;
}
