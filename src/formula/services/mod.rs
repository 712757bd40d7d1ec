mod allergen_filter;
mod bom_grouper;
mod breakdown_table;
mod code_normalizer;
mod component_index;
mod composition_check;
mod inci_summary;
mod material_table;
mod weight_calculator;

pub use allergen_filter::{AllergenFilter, AllergenRow};
pub use bom_grouper::BomGrouper;
pub use breakdown_table::{BreakdownRow, BreakdownTable};
pub use code_normalizer::CodeNormalizer;
pub use component_index::{ComponentIndex, ComponentsByCode};
pub use composition_check::{CompositionCheck, CompositionWarning, RATIO_TOLERANCE};
pub use inci_summary::{InciSummary, InciSummaryRow};
pub use material_table::{MaterialRow, MaterialTable};
pub use weight_calculator::WeightCalculator;
