//! labdoc - formula aggregation engine for cosmetics lab documents
//!
//! Turns a finished product's bill of materials into INCI composition
//! tables: per raw material, per component, per INCI substance, and the
//! declarable fragrance allergens.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`formula`): BOM grouping, weight calculation and the aggregation views
//! - **Application Layer** (`application`): Use case, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): PostgREST and snapshot stores, formatters, console and filesystem
//! - **Shared** (`shared`): Error types and file safety helpers
//!
//! # Example
//!
//! ```no_run
//! use labdoc::prelude::*;
//! use std::path::Path;
//!
//! # async fn example() -> Result<()> {
//! let store = SnapshotStore::load(Path::new("formula-snapshot.json"))?;
//! let use_case = AggregateFormulaUseCase::new(
//!     store.clone(),
//!     store.clone(),
//!     store,
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(FormulaRequest::new("P-1001")).await?;
//! let model = FormulaReadModelBuilder::build(&response, DocumentView::Summary);
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod formula;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, SnapshotStore, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::PostgrestStore;
    pub use crate::application::dto::{DocumentView, FormulaRequest, FormulaResponse, OutputFormat};
    pub use crate::application::read_models::{FormulaReadModel, FormulaReadModelBuilder};
    pub use crate::application::use_cases::AggregateFormulaUseCase;
    pub use crate::formula::domain::{AggregatedComponentRow, BomGroup, BomLine, IngredientComponent, Product};
    pub use crate::formula::policies::{FragranceAllergens, MissingRatioPolicy, DEFAULT_ALLERGEN_THRESHOLD};
    pub use crate::formula::services::{
        AllergenFilter, BomGrouper, BreakdownTable, CodeNormalizer, ComponentIndex, InciSummary,
        MaterialTable, WeightCalculator,
    };
    pub use crate::ports::outbound::{
        BomStore, ComponentStore, DocumentFormatter, OutputPresenter, ProductStore, ProgressReporter,
    };
    pub use crate::shared::Result;
}
