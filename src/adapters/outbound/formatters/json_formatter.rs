use crate::application::read_models::FormulaReadModel;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the read model as pretty-printed JSON
///
/// Numbers keep full precision; sections outside the requested view are
/// omitted.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, model: &FormulaReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}
