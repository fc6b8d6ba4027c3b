//! Builder for constructing GraphReadModel from domain objects

use super::graph_read_model::{GraphReadModel, NodeView};
use crate::dependency_analysis::domain::{ClosureMap, RegistryView};

/// Builder for constructing GraphReadModel from a closure and its registry
pub struct GraphReadModelBuilder;

impl GraphReadModelBuilder {
    /// Builds the read model
    ///
    /// Core dependencies come from the closure. Feature dependencies are
    /// looked up in the registry, since the closure itself only follows core
    /// edges.
    pub fn build<R>(closure: &ClosureMap, registry: &R) -> GraphReadModel
    where
        R: RegistryView + ?Sized,
    {
        let nodes = closure
            .iter()
            .map(|(name, dependencies)| NodeView {
                name: name.to_string(),
                dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
                feature_dependencies: registry
                    .find_by_name(name.as_str())
                    .map(|pkg| pkg.feature_dependencies().map(|d| d.to_string()).collect())
                    .unwrap_or_default(),
            })
            .collect();

        GraphReadModel { nodes }
    }
}
