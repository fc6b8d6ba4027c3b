//! Parser for TOML registry lockfiles in the uv.lock layout
//!
//! ```toml
//! [[package]]
//! name = "requests"
//! dependencies = [{ name = "urllib3" }]
//!
//! [package.optional-dependencies]
//! socks = [{ name = "pysocks" }]
//! ```
//!
//! Optional-dependency groups and dev-dependency groups both become
//! features, ordered by group name (optional groups first). Keys this tool
//! does not need (`version`, `source`, `wheels`, markers...) are ignored.

use crate::dependency_analysis::domain::{Feature, Package, PackageName};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct RegistryLock {
    #[serde(default)]
    package: Vec<LockPackage>,
}

#[derive(Debug, Deserialize)]
struct LockPackage {
    name: String,
    #[serde(default)]
    dependencies: Vec<LockDependency>,
    #[serde(default, rename = "optional-dependencies")]
    optional_dependencies: BTreeMap<String, Vec<LockDependency>>,
    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: BTreeMap<String, Vec<LockDependency>>,
}

#[derive(Debug, Deserialize)]
struct LockDependency {
    name: String,
}

/// Parses lockfile content into packages in file order
pub fn parse_lockfile(content: &str) -> Result<Vec<Package>> {
    let lockfile: RegistryLock = toml::from_str(content).context("Invalid TOML")?;

    lockfile.package.into_iter().map(into_package).collect()
}

fn into_package(pkg: LockPackage) -> Result<Package> {
    let name = PackageName::new(pkg.name)?;
    let mut package = Package::new(name, names(pkg.dependencies)?);

    let groups = pkg
        .optional_dependencies
        .into_iter()
        .chain(pkg.dev_dependencies);
    for (group, dependencies) in groups {
        package = package.with_feature(Feature::new(group, names(dependencies)?));
    }

    Ok(package)
}

fn names(dependencies: Vec<LockDependency>) -> Result<Vec<PackageName>> {
    dependencies
        .into_iter()
        .map(|d| PackageName::new(d.name))
        .collect()
}
