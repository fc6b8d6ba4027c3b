use std::path::PathBuf;

/// DependInfoRequest - request DTO for the dependency listing use case
#[derive(Debug, Clone)]
pub struct DependInfoRequest {
    /// Registry source: a lockfile or a ports directory
    pub registry_path: PathBuf,
    /// Requested root packages; empty means the whole registry
    pub roots: Vec<String>,
    /// Patterns for excluding packages before the closure is computed
    pub exclude_patterns: Vec<String>,
}

impl DependInfoRequest {
    pub fn new(registry_path: PathBuf, roots: Vec<String>, exclude_patterns: Vec<String>) -> Self {
        Self {
            registry_path,
            roots,
            exclude_patterns,
        }
    }
}
