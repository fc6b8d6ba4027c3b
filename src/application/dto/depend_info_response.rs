use crate::application::read_models::GraphReadModel;
use crate::dependency_analysis::domain::ClosureMap;

/// DependInfoResponse - result of the dependency listing use case
#[derive(Debug, Clone)]
pub struct DependInfoResponse {
    /// Package name to direct dependencies, restricted to the closure
    pub closure: ClosureMap,
    /// Formatter-ready view of the closure, including feature edges
    pub graph: GraphReadModel,
}

impl DependInfoResponse {
    pub fn new(closure: ClosureMap, graph: GraphReadModel) -> Self {
        Self { closure, graph }
    }
}
