mod fragrance_allergens;
mod missing_ratio;

pub use fragrance_allergens::{FragranceAllergens, DEFAULT_ALLERGEN_THRESHOLD};
pub use missing_ratio::MissingRatioPolicy;
