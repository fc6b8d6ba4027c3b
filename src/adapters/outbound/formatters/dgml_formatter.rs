use crate::application::read_models::GraphReadModel;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

const DGML_NAMESPACE: &str = "http://schemas.microsoft.com/vs/2009/dgml";

/// DgmlFormatter adapter producing a Directed Graph Markup Language document
///
/// Every package becomes a `<Node>`, including packages without
/// dependencies. Links cover core dependencies followed by feature
/// dependencies; link targets are not required to be nodes. Node ids are the
/// original package names, which `PackageName` validation keeps free of XML
/// special characters.
pub struct DgmlFormatter;

impl DgmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DgmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DgmlFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        let mut nodes = String::new();
        let mut links = String::new();

        for node in &model.nodes {
            write!(nodes, "<Node Id=\"{}\" />", node.name)?;

            for target in node.dependencies.iter().chain(&node.feature_dependencies) {
                write!(
                    links,
                    "<Link Source=\"{}\" Target=\"{}\" />",
                    node.name, target
                )?;
            }
        }

        let mut output = String::with_capacity(nodes.len() + links.len() + 160);
        output.push_str(XML_DECLARATION);
        write!(output, "<DirectedGraph xmlns=\"{}\">", DGML_NAMESPACE)?;
        write!(output, "<Nodes>{}</Nodes>", nodes)?;
        write!(output, "<Links>{}</Links>", links)?;
        output.push_str("</DirectedGraph>");
        Ok(output)
    }
}
