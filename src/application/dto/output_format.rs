/// Output format enumeration for dependency rendering
///
/// Shared by the CLI, the config file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `name: dep1, dep2` listing (default)
    #[default]
    Text,
    /// Graphviz DOT digraph
    Dot,
    /// Directed Graph Markup Language (XML)
    Dgml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "dot" => Ok(OutputFormat::Dot),
            "dgml" => Ok(OutputFormat::Dgml),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'dot' or 'dgml'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Dgml => write!(f, "dgml"),
        }
    }
}
