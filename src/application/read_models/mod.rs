//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that formatters render from.

pub mod formula_read_model;
pub mod formula_read_model_builder;

#[cfg(test)]
pub(crate) mod test_support;

pub use formula_read_model::{
    AllergenRowView, AllergenTableView, BreakdownRowView, DocumentMetadataView, FormulaReadModel,
    InciRowView, MaterialRowView, ProductView, TableView,
};
pub use formula_read_model_builder::FormulaReadModelBuilder;
