use crate::application::read_models::GraphReadModel;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// TextFormatter adapter producing one `name: dep1, dep2` line per package
///
/// A package without dependencies renders as `name: ` (the trailing space
/// is kept).
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        let lines: Vec<String> = model
            .nodes
            .iter()
            .map(|node| format!("{}: {}", node.name, node.dependencies.join(", ")))
            .collect();
        Ok(lines.join("\n"))
    }
}
