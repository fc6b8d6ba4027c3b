use crate::application::read_models::GraphReadModel;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Graph header: left-to-right layout, minimum edge length 3, no overlap
const DOT_HEADER: &str = "digraph G{ rankdir=LR; edge [minlen=3]; overlap=false;";

/// DotFormatter adapter producing a Graphviz digraph on a single line
///
/// Packages without dependencies are not drawn; they are counted into one
/// trailing `empty` node labelled `"<n> singletons..."`.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Bare DOT identifiers cannot contain `-`.
    fn node_id(name: &str) -> String {
        name.replace('-', "_")
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        let mut output = String::with_capacity(DOT_HEADER.len() + model.nodes.len() * 32);
        output.push_str(DOT_HEADER);

        for node in model.nodes.iter().filter(|n| !n.is_singleton()) {
            let id = Self::node_id(&node.name);
            write!(output, "{};", id)?;
            for dependency in &node.dependencies {
                write!(output, "{} -> {};", id, Self::node_id(dependency))?;
            }
        }

        write!(
            output,
            "empty [label=\"{} singletons...\"]; }}",
            model.singleton_count()
        )?;
        Ok(output)
    }
}
