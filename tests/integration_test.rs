/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use dep_info::prelude::*;

fn pkg(name: &str, deps: &[&str]) -> Package {
    Package::from_names(name, deps).unwrap()
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn request(roots: &[&str], excludes: &[&str]) -> DependInfoRequest {
    DependInfoRequest::new(
        PathBuf::from("ports"),
        roots.iter().map(|r| r.to_string()).collect(),
        excludes.iter().map(|e| e.to_string()).collect(),
    )
}

fn node_names(model: &GraphReadModel) -> Vec<&str> {
    model.nodes.iter().map(|n| n.name.as_str()).collect()
}

#[test]
fn test_depend_info_happy_path() {
    let reader = MockRegistryReader::new(vec![
        pkg("curl", &["zlib", "openssl"]),
        pkg("openssl", &[]),
        pkg("zlib", &[]),
        pkg("boost", &[]),
    ]);
    let reporter = MockProgressReporter::new();
    let use_case = DependInfoUseCase::new(reader, reporter.clone());

    let response = use_case.execute(request(&["curl"], &[])).unwrap();

    assert_eq!(node_names(&response.graph), vec!["curl", "openssl", "zlib"]);
    assert_eq!(response.closure.edge_count(), 2);

    let output = TextFormatter::new().format(&response.graph).unwrap();
    assert_eq!(output, "curl: zlib, openssl\nopenssl: \nzlib: ");

    let messages = reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Detected 4 package(s)")));
    assert_eq!(
        messages.last().map(String::as_str),
        Some("Completed: ✅ Dependency closure: 3 package(s), 2 edge(s)")
    );
    assert!(reporter.errors().is_empty());
}

#[test]
fn test_depend_info_cycle_with_dot_output() {
    let reader = MockRegistryReader::new(vec![pkg("A", &["B"]), pkg("B", &["A"])]);
    let use_case = DependInfoUseCase::new(reader, MockProgressReporter::new());

    let response = use_case.execute(request(&["A"], &[])).unwrap();
    let output = DotFormatter::new().format(&response.graph).unwrap();

    assert_eq!(
        output,
        "digraph G{ rankdir=LR; edge [minlen=3]; overlap=false;A;A -> B;B;B -> A;empty [label=\"0 singletons...\"]; }"
    );
}

#[test]
fn test_depend_info_unknown_roots_are_silent() {
    let reader = MockRegistryReader::new(vec![pkg("zlib", &[])]);
    let reporter = MockProgressReporter::new();
    let use_case = DependInfoUseCase::new(reader, reporter.clone());

    let response = use_case.execute(request(&["does-not-exist"], &[])).unwrap();

    assert!(response.closure.is_empty());
    assert_eq!(TextFormatter::new().format(&response.graph).unwrap(), "");
    assert!(reporter.errors().is_empty());
}

#[test]
fn test_depend_info_exclusion_removes_packages_and_edges() {
    let reader = MockRegistryReader::new(vec![
        pkg("curl", &["zlib", "openssl"]),
        pkg("openssl", &["zlib"]),
        pkg("zlib", &[]),
    ]);
    let reporter = MockProgressReporter::new();
    let use_case = DependInfoUseCase::new(reader, reporter.clone());

    let response = use_case
        .execute(request(&["curl"], &["open*", "ghost"]))
        .unwrap();

    assert_eq!(node_names(&response.graph), vec!["curl", "zlib"]);
    assert_eq!(response.graph.nodes[0].dependencies, vec!["zlib".to_string()]);
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("Excluded 1 package(s)")));
    assert_eq!(reporter.errors().len(), 1);
    assert!(reporter.errors()[0].contains("'ghost'"));
}

#[test]
fn test_depend_info_invalid_exclude_pattern() {
    let reader = MockRegistryReader::new(vec![pkg("zlib", &[])]);
    let use_case = DependInfoUseCase::new(reader, MockProgressReporter::new());

    let result = use_case.execute(request(&[], &["bad pattern"]));

    assert!(result.is_err());
}

#[test]
fn test_depend_info_reader_failure() {
    let use_case =
        DependInfoUseCase::new(MockRegistryReader::with_failure(), MockProgressReporter::new());

    let err = use_case.execute(request(&[], &[])).unwrap_err();

    assert!(err.to_string().contains("Mock registry read failure"));
}

#[test]
fn test_depend_info_feature_edges_in_dgml_only() {
    let curl = pkg("curl", &["zlib"]).with_feature(Feature::new(
        "http2".to_string(),
        vec![PackageName::new("nghttp2".to_string()).unwrap()],
    ));
    let reader = MockRegistryReader::new(vec![curl, pkg("zlib", &[]), pkg("nghttp2", &[])]);
    let use_case = DependInfoUseCase::new(reader, MockProgressReporter::new());

    let response = use_case.execute(request(&["curl"], &[])).unwrap();

    // Feature dependencies are drawn but not followed.
    assert_eq!(node_names(&response.graph), vec!["curl", "zlib"]);
    let text = TextFormatter::new().format(&response.graph).unwrap();
    assert_eq!(text, "curl: zlib\nzlib: ");
    let dgml = DgmlFormatter::new().format(&response.graph).unwrap();
    assert!(dgml.contains("<Link Source=\"curl\" Target=\"zlib\" /><Link Source=\"curl\" Target=\"nghttp2\" />"));
}

#[test]
fn test_ports_directory_and_lockfile_load_identical_registries() {
    let reporter = MockProgressReporter::new();
    let reader = FileSystemReader::new();

    let from_ports = reader
        .read_registry(&fixtures_path().join("ports"), &reporter)
        .unwrap();
    let from_lockfile = reader
        .read_registry(&fixtures_path().join("registry.lock"), &reporter)
        .unwrap();

    assert_eq!(from_ports, from_lockfile);
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m == "Progress: 9/9 - zlib"));
}

#[test]
fn test_fixture_closure_with_file_system_reader() {
    let use_case = DependInfoUseCase::new(FileSystemReader::new(), MockProgressReporter::new());
    let request = DependInfoRequest::new(
        fixtures_path().join("ports"),
        vec!["libxml2".to_string(), "cycle-a".to_string()],
        vec![],
    );

    let response = use_case.execute(request).unwrap();
    let output = TextFormatter::new().format(&response.graph).unwrap();

    assert_eq!(
        output,
        "cycle-a: cycle-b\ncycle-b: cycle-a\nlibxml2: zlib, libiconv\nzlib: "
    );
}
