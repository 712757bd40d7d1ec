/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use case and its results out to the
/// adapters, keeping the formula domain isolated.
mod document_view;
mod formula_request;
mod formula_response;
mod output_format;

pub use document_view::DocumentView;
pub use formula_request::FormulaRequest;
pub use formula_response::FormulaResponse;
pub use output_format::OutputFormat;
