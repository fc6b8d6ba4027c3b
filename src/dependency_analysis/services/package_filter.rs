use crate::dependency_analysis::domain::Package;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// PackageFilter - removes packages from a registry by name pattern
///
/// Patterns are case-sensitive; `*` matches zero or more characters. An
/// excluded package disappears from the registry and from every dependency
/// list (core and feature) of the remaining packages.
#[derive(Debug)]
pub struct PackageFilter {
    patterns: Vec<ExcludePattern>,
}

impl PackageFilter {
    /// Creates a new PackageFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcard-only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Drops matching packages and strips matching names from the dependency
    /// lists of the packages that remain.
    pub fn filter_packages(&self, packages: Vec<Package>) -> Vec<Package> {
        packages
            .into_iter()
            .filter(|pkg| !self.matches(pkg.name().as_str()))
            .map(|mut pkg| {
                pkg.remove_dependencies_matching(|dep| self.matches(dep));
                pkg
            })
            .collect()
    }

    /// Checks if a package name matches any exclusion pattern
    pub fn matches(&self, package_name: &str) -> bool {
        // Evaluate every pattern so each one records whether it was used.
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(package_name) || hit)
    }

    /// Patterns that have not matched any name so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// One compiled exclusion pattern
///
/// The pattern is split on `*` into literal segments. The first segment is
/// anchored at the start unless the pattern starts with `*`, the last one at
/// the end unless it ends with `*`; the rest must appear in order between.
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    segments: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let segments = pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
            segments,
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = self.matches_segments(name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    fn matches_segments(&self, name: &str) -> bool {
        let mut rest = name;
        let last = self.segments.len() - 1;

        for (i, segment) in self.segments.iter().enumerate() {
            if i == 0 && self.anchored_start {
                match rest.strip_prefix(segment.as_str()) {
                    Some(r) => rest = r,
                    None => return false,
                }
                if i == last && self.anchored_end {
                    return rest.is_empty();
                }
                continue;
            }

            if i == last && self.anchored_end {
                return rest.ends_with(segment.as_str());
            }

            match rest.find(segment.as_str()) {
                Some(pos) => rest = &rest[pos + segment.len()..],
                None => return false,
            }
        }

        true
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|&c| !is_valid_pattern_char(c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '*'
}
