use crate::dependency_analysis::domain::Package;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use std::path::Path;

/// RegistryReader port for loading package definitions
///
/// This port abstracts where the registry comes from (a lockfile, a
/// directory of port definitions, ...). Implementations return packages in
/// source order; building the name index is left to the caller.
pub trait RegistryReader {
    /// Loads every package definition found at `source`
    ///
    /// # Arguments
    /// * `source` - Path to the registry (file or directory)
    /// * `progress_reporter` - Receives progress while many entries are read
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or is not readable
    /// - A definition cannot be parsed
    /// - A package or dependency name is invalid
    fn read_registry(
        &self,
        source: &Path,
        progress_reporter: &dyn ProgressReporter,
    ) -> Result<Vec<Package>>;
}
