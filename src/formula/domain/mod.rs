pub mod bom;
pub mod component;
pub mod component_row;
pub mod product;

pub use bom::{BomGroup, BomLine};
pub use component::IngredientComponent;
pub use component_row::AggregatedComponentRow;
pub use product::Product;
