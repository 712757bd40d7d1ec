use crate::shared::Result;

/// OutputPresenter port for delivering a rendered document
///
/// Hides whether the document goes to stdout or to a file.
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
