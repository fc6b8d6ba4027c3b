use super::*;
use crate::dependency_analysis::domain::{Feature, PackageName};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct MockRegistryReader {
    packages: Vec<Package>,
}

impl RegistryReader for MockRegistryReader {
    fn read_registry(
        &self,
        _source: &Path,
        _progress_reporter: &dyn ProgressReporter,
    ) -> Result<Vec<Package>> {
        Ok(self.packages.clone())
    }
}

struct FailingRegistryReader;

impl RegistryReader for FailingRegistryReader {
    fn read_registry(
        &self,
        source: &Path,
        _progress_reporter: &dyn ProgressReporter,
    ) -> Result<Vec<Package>> {
        anyhow::bail!("cannot open {}", source.display())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: RefCell<Vec<String>>,
    completions: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.completions.borrow_mut().push(message.to_string());
    }
}

fn pkg(name: &str, deps: &[&str]) -> Package {
    Package::from_names(name, deps).unwrap()
}

fn use_case(packages: Vec<Package>) -> DependInfoUseCase<MockRegistryReader, MockProgressReporter> {
    DependInfoUseCase::new(
        MockRegistryReader { packages },
        MockProgressReporter::default(),
    )
}

fn request(roots: &[&str], exclude: &[&str]) -> DependInfoRequest {
    DependInfoRequest::new(
        PathBuf::from("ports"),
        roots.iter().map(|s| s.to_string()).collect(),
        exclude.iter().map(|s| s.to_string()).collect(),
    )
}

#[test]
fn test_execute_without_roots_lists_everything() {
    let use_case = use_case(vec![pkg("curl", &["zlib"]), pkg("zlib", &[]), pkg("bzip2", &[])]);

    let response = use_case.execute(request(&[], &[])).unwrap();

    assert_eq!(response.closure.len(), 3);
    let names: Vec<&str> = response.graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["bzip2", "curl", "zlib"]);
}

#[test]
fn test_execute_with_roots_restricts_closure() {
    let use_case = use_case(vec![
        pkg("curl", &["zlib", "openssl"]),
        pkg("openssl", &[]),
        pkg("zlib", &[]),
        pkg("boost", &[]),
    ]);

    let response = use_case.execute(request(&["curl", "unknown"], &[])).unwrap();

    let names: Vec<&str> = response.closure.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["curl", "openssl", "zlib"]);
    assert!(use_case.progress_reporter.errors.borrow().is_empty());
}

#[test]
fn test_execute_applies_exclusions_before_closure() {
    let use_case = use_case(vec![
        pkg("app", &["zlib", "gtest"]),
        pkg("gtest", &["zlib"]),
        pkg("zlib", &[]),
    ]);

    let response = use_case.execute(request(&["app"], &["gtest"])).unwrap();

    assert!(!response.closure.contains("gtest"));
    let app_deps: Vec<&str> = response
        .closure
        .get("app")
        .unwrap()
        .iter()
        .map(|d| d.as_str())
        .collect();
    assert_eq!(app_deps, vec!["zlib"]);
}

#[test]
fn test_execute_warns_about_unmatched_patterns() {
    let use_case = use_case(vec![pkg("zlib", &[])]);

    use_case.execute(request(&[], &["nothing-*"])).unwrap();

    let errors = use_case.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("nothing-*"));
}

#[test]
fn test_execute_rejects_invalid_pattern() {
    let use_case = use_case(vec![pkg("zlib", &[])]);

    let result = use_case.execute(request(&[], &["bad pattern"]));

    assert!(result.is_err());
}

#[test]
fn test_execute_warns_about_duplicates() {
    let use_case = use_case(vec![pkg("zlib", &[]), pkg("zlib", &["bzip2"])]);

    let response = use_case.execute(request(&[], &[])).unwrap();

    assert_eq!(response.closure.len(), 1);
    assert!(response.closure.get("zlib").unwrap().is_empty());
    let errors = use_case.progress_reporter.errors.borrow();
    assert!(errors[0].contains("'zlib' is defined more than once"));
}

#[test]
fn test_execute_carries_feature_edges_into_graph() {
    let with_feature = pkg("A", &["B"]).with_feature(Feature::new(
        "ssl".to_string(),
        vec![PackageName::new("C".to_string()).unwrap()],
    ));
    let use_case = use_case(vec![with_feature]);

    let response = use_case.execute(request(&["A"], &[])).unwrap();

    assert_eq!(response.closure.len(), 1);
    assert_eq!(response.graph.nodes[0].feature_dependencies, vec!["C".to_string()]);
}

#[test]
fn test_execute_propagates_reader_failure() {
    let use_case = DependInfoUseCase::new(FailingRegistryReader, MockProgressReporter::default());

    let err = use_case.execute(request(&[], &[])).unwrap_err();

    assert!(err.to_string().contains("cannot open ports"));
}

#[test]
fn test_execute_reports_completion_with_closure_size() {
    let use_case = use_case(vec![pkg("curl", &["zlib", "ghost"]), pkg("zlib", &[])]);

    use_case.execute(request(&["curl"], &[])).unwrap();

    let completions = use_case.progress_reporter.completions.borrow();
    assert_eq!(
        completions.as_slice(),
        ["✅ Dependency closure: 2 package(s), 2 edge(s)"]
    );
}

#[test]
fn test_execute_does_not_report_completion_on_failure() {
    let use_case = DependInfoUseCase::new(FailingRegistryReader, MockProgressReporter::default());

    assert!(use_case.execute(request(&[], &[])).is_err());
    assert!(use_case.progress_reporter.completions.borrow().is_empty());
}
