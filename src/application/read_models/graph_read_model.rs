//! Read model consumed by the graph formatters
//!
//! A flattened, string-only view of the dependency closure so that
//! formatters never have to touch the registry or the domain types.

/// One package in the rendered graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeView {
    /// Package name exactly as declared
    pub name: String,
    /// Direct core dependencies, in declaration order
    pub dependencies: Vec<String>,
    /// Dependencies declared under features, in feature declaration order
    pub feature_dependencies: Vec<String>,
}

impl NodeView {
    /// True when the package has no core dependencies
    pub fn is_singleton(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// Graph read model: one node per closure key, ascending by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphReadModel {
    pub nodes: Vec<NodeView>,
}

impl GraphReadModel {
    pub fn singleton_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_singleton()).count()
    }
}
