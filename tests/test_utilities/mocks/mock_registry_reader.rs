use dep_info::prelude::*;
use std::path::Path;

/// Mock RegistryReader for testing
pub struct MockRegistryReader {
    pub packages: Vec<Package>,
    pub should_fail: bool,
}

impl MockRegistryReader {
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            packages,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            packages: Vec::new(),
            should_fail: true,
        }
    }
}

impl RegistryReader for MockRegistryReader {
    fn read_registry(
        &self,
        _source: &Path,
        _progress_reporter: &dyn ProgressReporter,
    ) -> Result<Vec<Package>> {
        if self.should_fail {
            anyhow::bail!("Mock registry read failure");
        }
        Ok(self.packages.clone())
    }
}
