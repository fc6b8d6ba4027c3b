use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DependInfoError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output. The
/// content goes to a temporary file next to the target, which is then renamed
/// over it, so a failed run never leaves a truncated graph behind. The target
/// is replaced on every run; empty content leaves an empty file.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        DependInfoError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn parent_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        let parent = self.parent_directory();
        if !parent.is_dir() {
            return Err(self.write_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(self.write_error(
                    "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
                ));
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        let mut temp_file = NamedTempFile::new_in(self.parent_directory())
            .map_err(|e| self.write_error(e.to_string()))?;
        if !content.is_empty() {
            temp_file
                .write_all(content.as_bytes())
                .and_then(|_| temp_file.write_all(b"\n"))
                .map_err(|e| self.write_error(e.to_string()))?;
        }
        temp_file
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        if content.is_empty() {
            return Ok(());
        }

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", content)
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
