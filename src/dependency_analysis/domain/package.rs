use crate::shared::error::DependInfoError;
use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for package name with validation
///
/// Accepted names never contain quotes, angle brackets, ampersands or
/// whitespace, so they can be written into DOT and DGML output unescaped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid(&name, "package name cannot be empty"));
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(
                &name,
                &format!(
                    "package name is too long ({} bytes, maximum {})",
                    name.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
            ));
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(invalid(
                &name,
                "only alphanumeric characters, hyphens, underscores and dots are allowed",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(name: &str, reason: &str) -> anyhow::Error {
    DependInfoError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Optional feature of a package with its own dependency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    name: String,
    dependencies: Vec<PackageName>,
}

impl Feature {
    pub fn new(name: String, dependencies: Vec<PackageName>) -> Self {
        Self { name, dependencies }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &[PackageName] {
        &self.dependencies
    }
}

/// Package value object: a name, its core dependencies in declaration order,
/// and its feature groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: PackageName,
    dependencies: Vec<PackageName>,
    features: Vec<Feature>,
}

impl Package {
    pub fn new(name: PackageName, dependencies: Vec<PackageName>) -> Self {
        Self {
            name,
            dependencies,
            features: Vec::new(),
        }
    }

    /// Builds a package from raw strings, validating every name.
    pub fn from_names(name: &str, dependencies: &[&str]) -> Result<Self> {
        let dependencies = dependencies
            .iter()
            .map(|d| PackageName::new(d.to_string()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(PackageName::new(name.to_string())?, dependencies))
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn dependencies(&self) -> &[PackageName] {
        &self.dependencies
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Dependency names declared under any feature, in feature order.
    pub fn feature_dependencies(&self) -> impl Iterator<Item = &PackageName> {
        self.features.iter().flat_map(|f| f.dependencies.iter())
    }

    /// Drops every dependency, core or feature-scoped, for which `exclude`
    /// returns true.
    pub fn remove_dependencies_matching<F>(&mut self, mut exclude: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.dependencies.retain(|d| !exclude(d.as_str()));
        for feature in &mut self.features {
            feature.dependencies.retain(|d| !exclude(d.as_str()));
        }
    }
}
