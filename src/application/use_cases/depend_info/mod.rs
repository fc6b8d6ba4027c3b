use crate::application::dto::{DependInfoRequest, DependInfoResponse};
use crate::application::read_models::GraphReadModelBuilder;
use crate::dependency_analysis::domain::{Package, PackageRegistry};
use crate::dependency_analysis::services::{ClosureBuilder, PackageFilter};
use crate::ports::outbound::{ProgressReporter, RegistryReader};
use crate::shared::Result;

/// DependInfoUseCase - loads a registry and computes a dependency closure
///
/// Infrastructure is injected through generics, as elsewhere in the
/// application layer.
///
/// # Type Parameters
/// * `RR` - RegistryReader implementation
/// * `PR` - ProgressReporter implementation
pub struct DependInfoUseCase<RR, PR> {
    registry_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> DependInfoUseCase<RR, PR>
where
    RR: RegistryReader,
    PR: ProgressReporter,
{
    /// Creates a new DependInfoUseCase with injected dependencies
    pub fn new(registry_reader: RR, progress_reporter: PR) -> Self {
        Self {
            registry_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// Requested names that the registry does not know are skipped without
    /// any diagnostic.
    ///
    /// # Errors
    /// Returns an error if the registry cannot be loaded or an exclusion
    /// pattern is invalid.
    pub fn execute(&self, request: DependInfoRequest) -> Result<DependInfoResponse> {
        // Step 1: Load package definitions
        let packages = self.load_packages(&request)?;

        // Step 2: Apply exclusion filters
        let packages = self.apply_exclusion_filters(packages, &request)?;

        // Step 3: Index the registry
        let registry = self.build_registry(packages);

        // Step 4: Compute the closure
        let closure = ClosureBuilder::build(&request.roots, &registry);

        // Step 5: Build the read model for the formatters
        let graph = GraphReadModelBuilder::build(&closure, &registry);

        self.progress_reporter.report_completion(&format!(
            "✅ Dependency closure: {} package(s), {} edge(s)",
            closure.len(),
            closure.edge_count()
        ));

        Ok(DependInfoResponse::new(closure, graph))
    }

    fn load_packages(&self, request: &DependInfoRequest) -> Result<Vec<Package>> {
        self.progress_reporter.report(&format!(
            "📖 Loading package registry from: {}",
            request.registry_path.display()
        ));

        let packages = self
            .registry_reader
            .read_registry(&request.registry_path, &self.progress_reporter)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", packages.len()));

        Ok(packages)
    }

    /// Removes excluded packages and the edges pointing at them
    ///
    /// Patterns that matched nothing are reported as warnings.
    fn apply_exclusion_filters(
        &self,
        packages: Vec<Package>,
        request: &DependInfoRequest,
    ) -> Result<Vec<Package>> {
        if request.exclude_patterns.is_empty() {
            return Ok(packages);
        }

        let filter = PackageFilter::new(request.exclude_patterns.clone())?;
        let original_count = packages.len();
        let filtered = filter.filter_packages(packages);

        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} package(s) based on filters",
                excluded_count
            ));
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any package.",
                pattern
            ));
        }

        Ok(filtered)
    }

    fn build_registry(&self, packages: Vec<Package>) -> PackageRegistry {
        let registry = PackageRegistry::new(packages);

        for duplicate in registry.duplicates() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Package '{}' is defined more than once; using the first definition.",
                duplicate
            ));
        }

        registry
    }
}

#[cfg(test)]
mod tests;
