//! dep-info - dependency closure and graph rendering for port registries
//!
//! This library loads a registry of packages (a ports directory of `CONTROL`
//! files, or a TOML registry lockfile), computes the transitive dependency
//! closure of a set of root packages and renders it as a plain listing, a
//! Graphviz DOT graph or a DGML graph.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): Packages, the registry view and closure computation
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_info::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = DependInfoUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = DependInfoRequest::new(PathBuf::from("ports"), vec!["curl".to_string()], vec![]);
//! let response = use_case.execute(request)?;
//!
//! let output = DotFormatter::new().format(&response.graph)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{DgmlFormatter, DotFormatter, TextFormatter};
    pub use crate::application::dto::{DependInfoRequest, DependInfoResponse, OutputFormat};
    pub use crate::application::read_models::{GraphReadModel, NodeView};
    pub use crate::application::use_cases::DependInfoUseCase;
    pub use crate::dependency_analysis::domain::{
        ClosureMap, Feature, Package, PackageName, PackageRegistry, RegistryView,
    };
    pub use crate::dependency_analysis::services::{ClosureBuilder, PackageFilter};
    pub use crate::ports::outbound::{
        GraphFormatter, OutputPresenter, ProgressReporter, RegistryReader,
    };
    pub use crate::shared::Result;
}
