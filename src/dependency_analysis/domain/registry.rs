use super::{Package, PackageName};
use std::collections::HashMap;

/// Read-only view over the known packages
///
/// A name that is not in the registry is an ordinary answer (`None`), not an
/// error: dependency lists may point at packages the registry does not hold.
pub trait RegistryView {
    /// Looks up a package by its exact name
    fn find_by_name(&self, name: &str) -> Option<&Package>;

    /// All packages in storage order
    fn all_packages(&self) -> &[Package];
}

/// PackageRegistry aggregate holding every loaded package
///
/// Packages keep the order in which the source listed them; lookups go
/// through a name index. When a name occurs more than once the first
/// occurrence is kept and the later ones are remembered as duplicates.
#[derive(Debug, Clone, Default)]
pub struct PackageRegistry {
    packages: Vec<Package>,
    index: HashMap<PackageName, usize>,
    duplicates: Vec<PackageName>,
}

impl PackageRegistry {
    pub fn new(packages: Vec<Package>) -> Self {
        let mut kept = Vec::with_capacity(packages.len());
        let mut index = HashMap::with_capacity(packages.len());
        let mut duplicates = Vec::new();

        for package in packages {
            if index.contains_key(package.name()) {
                duplicates.push(package.name().clone());
                continue;
            }
            index.insert(package.name().clone(), kept.len());
            kept.push(package);
        }

        Self {
            packages: kept,
            index,
            duplicates,
        }
    }

    /// Names that appeared more than once in the source (later occurrences)
    pub fn duplicates(&self) -> &[PackageName] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl RegistryView for PackageRegistry {
    fn find_by_name(&self, name: &str) -> Option<&Package> {
        self.index.get(name).map(|&i| &self.packages[i])
    }

    fn all_packages(&self) -> &[Package] {
        &self.packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(name: &str, deps: &[&str]) -> Package {
        Package::from_names(name, deps).unwrap()
    }

    #[test]
    fn test_find_by_name() {
        let registry = PackageRegistry::new(vec![pkg("curl", &["zlib"]), pkg("zlib", &[])]);

        let curl = registry.find_by_name("curl").unwrap();
        assert_eq!(curl.dependencies()[0].as_str(), "zlib");
        assert!(registry.find_by_name("openssl").is_none());
    }

    #[test]
    fn test_all_packages_keeps_storage_order() {
        let registry = PackageRegistry::new(vec![
            pkg("zlib", &[]),
            pkg("curl", &["zlib"]),
            pkg("bzip2", &[]),
        ]);

        let names: Vec<&str> = registry
            .all_packages()
            .iter()
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(names, vec!["zlib", "curl", "bzip2"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let registry = PackageRegistry::new(vec![
            pkg("curl", &["zlib"]),
            pkg("curl", &["openssl"]),
        ]);

        assert_eq!(registry.len(), 1);
        let curl = registry.find_by_name("curl").unwrap();
        assert_eq!(curl.dependencies()[0].as_str(), "zlib");
        assert_eq!(registry.duplicates().len(), 1);
        assert_eq!(registry.duplicates()[0].as_str(), "curl");
    }

    #[test]
    fn test_empty_registry() {
        let registry = PackageRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.all_packages().is_empty());
        assert!(registry.duplicates().is_empty());
    }
}
