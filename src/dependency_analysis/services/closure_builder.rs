use crate::dependency_analysis::domain::{ClosureMap, RegistryView};
use std::collections::{HashSet, VecDeque};

/// ClosureBuilder service for computing dependency closures
///
/// Pure business logic: it only reads from a `RegistryView` and never fails.
/// Names that the registry does not know are skipped without a key.
pub struct ClosureBuilder;

impl ClosureBuilder {
    /// Builds the dependency closure for `roots`
    ///
    /// With no roots every registry package is listed with its direct core
    /// dependencies. Otherwise only packages reachable from the roots are
    /// listed.
    ///
    /// # Arguments
    /// * `roots` - Requested package names (may include unknown names)
    /// * `registry` - The registry to resolve names against
    pub fn build<R>(roots: &[String], registry: &R) -> ClosureMap
    where
        R: RegistryView + ?Sized,
    {
        if roots.is_empty() {
            return Self::full_registry(registry);
        }
        Self::expand(roots, registry)
    }

    fn full_registry<R>(registry: &R) -> ClosureMap
    where
        R: RegistryView + ?Sized,
    {
        let mut closure = ClosureMap::new();
        for package in registry.all_packages() {
            closure.insert(package.name().clone(), package.dependencies().to_vec());
        }
        closure
    }

    /// Worklist expansion. A name is marked seen before it is queued, so each
    /// name is looked up at most once and cycles terminate.
    fn expand<R>(roots: &[String], registry: &R) -> ClosureMap
    where
        R: RegistryView + ?Sized,
    {
        let mut closure = ClosureMap::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut worklist: VecDeque<&str> = VecDeque::new();

        for root in roots {
            if seen.insert(root.as_str()) {
                worklist.push_back(root.as_str());
            }
        }

        while let Some(name) = worklist.pop_front() {
            let Some(package) = registry.find_by_name(name) else {
                continue;
            };

            closure.insert(package.name().clone(), package.dependencies().to_vec());

            for dependency in package.dependencies() {
                if seen.insert(dependency.as_str()) {
                    worklist.push_back(dependency.as_str());
                }
            }
        }

        closure
    }
}
