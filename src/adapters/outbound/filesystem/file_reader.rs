use super::control_parser::parse_control_file;
use super::lockfile_parser::parse_lockfile;
use crate::dependency_analysis::domain::Package;
use crate::ports::outbound::{ProgressReporter, RegistryReader};
use crate::shared::error::DependInfoError;
use crate::shared::security::{read_regular_file, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-port metadata file inside a ports directory
const CONTROL_FILE_NAME: &str = "CONTROL";

/// FileSystemReader adapter for loading a package registry from disk
///
/// This adapter implements the RegistryReader port for two layouts:
/// - a ports directory, where every subdirectory holds a `CONTROL` file
/// - a single TOML registry lockfile
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_lockfile(&self, path: &Path) -> Result<Vec<Package>> {
        let content = read_regular_file(path, "registry lockfile")?;

        parse_lockfile(&content).map_err(|e| {
            DependInfoError::RegistryParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }

    fn read_ports_directory(
        &self,
        ports_dir: &Path,
        progress_reporter: &dyn ProgressReporter,
    ) -> Result<Vec<Package>> {
        let control_files = Self::list_control_files(ports_dir)?;
        let total = control_files.len();
        let mut packages = Vec::with_capacity(total);

        for (i, control_path) in control_files.iter().enumerate() {
            let port_name = control_path
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned());
            progress_reporter.report_progress(i + 1, total, port_name.as_deref());

            let content = read_regular_file(control_path, CONTROL_FILE_NAME)?;
            let package = parse_control_file(&content).map_err(|e| {
                DependInfoError::RegistryParseError {
                    path: control_path.clone(),
                    details: format!("{:#}", e),
                }
            })?;
            packages.push(package);
        }

        Ok(packages)
    }

    /// CONTROL files of all port subdirectories, sorted by port directory name
    ///
    /// Subdirectories without a CONTROL file are skipped. Symlinked entries
    /// are never followed.
    fn list_control_files(ports_dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(ports_dir).map_err(|e| DependInfoError::FileReadError {
            path: ports_dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut port_dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DependInfoError::FileReadError {
                path: ports_dir.to_path_buf(),
                details: e.to_string(),
            })?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                port_dirs.push(entry.path());
            }
        }
        port_dirs.sort();

        Ok(port_dirs
            .into_iter()
            .map(|dir| dir.join(CONTROL_FILE_NAME))
            .filter(|control| fs::symlink_metadata(control).is_ok())
            .collect())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryReader for FileSystemReader {
    fn read_registry(
        &self,
        source: &Path,
        progress_reporter: &dyn ProgressReporter,
    ) -> Result<Vec<Package>> {
        if fs::symlink_metadata(source).is_err() {
            return Err(DependInfoError::RegistryNotFound {
                path: source.to_path_buf(),
                suggestion: "Specify a ports directory or a registry lockfile with the --registry option."
                    .to_string(),
            }
            .into());
        }

        validate_not_symlink(source, "read")?;

        if source.is_dir() {
            self.read_ports_directory(source, progress_reporter)
        } else {
            self.read_lockfile(source)
        }
    }
}
