use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for PresenterType {
    fn from(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use dep_info::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_presenter_type_from_option() {
        assert_eq!(PresenterType::from(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from(Some(PathBuf::from("graph.dot"))),
            PresenterType::File(PathBuf::from("graph.dot"))
        );
    }

    #[test]
    fn test_create_file_presenter_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.dot");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("digraph G{ }").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "digraph G{ }\n");
    }

    #[test]
    fn test_presenter_type_equality() {
        let file1 = PresenterType::File(PathBuf::from("/tmp/output1.dgml"));
        let file2 = PresenterType::File(PathBuf::from("/tmp/output1.dgml"));
        assert_eq!(file1, file2);
        assert_ne!(file1, PresenterType::Stdout);
    }
}
