//! Configuration file support for dep-info.
//!
//! Provides YAML-based configuration through `dep-info.config.yml` files,
//! and the merge of file values with command-line arguments.

use anyhow::{bail, Context};
use dep_info::application::dto::OutputFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::Args;
use dep_info::shared::Result;

const CONFIG_FILENAME: &str = "dep-info.config.yml";

/// Registry location used when neither the CLI nor the config names one
const DEFAULT_REGISTRY: &str = "ports";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub registry: Option<PathBuf>,
    pub exclude_packages: Option<Vec<String>>,
    pub packages: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings for one run after merging CLI and config file.
#[derive(Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub registry: PathBuf,
    pub roots: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub output: Option<PathBuf>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes to null, not to an empty mapping.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merges command-line arguments over an optional config file.
///
/// CLI values win. Exclusion patterns from both sources are combined, and
/// config `packages` are only used when no package is given on the command
/// line.
pub fn resolve_options(args: Args, config: Option<ConfigFile>) -> Result<RunOptions> {
    let config = config.unwrap_or_default();

    let format = match (args.format(), config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(value)) => parse_format(value)?,
        (None, None) => OutputFormat::default(),
    };

    let registry = args
        .registry
        .or(config.registry)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY));

    let roots = if args.packages.is_empty() {
        config.packages.unwrap_or_default()
    } else {
        args.packages
    };

    let mut exclude_patterns = config.exclude_packages.unwrap_or_default();
    exclude_patterns.extend(args.exclude);

    Ok(RunOptions {
        format,
        registry,
        roots,
        exclude_patterns,
        output: args.output,
    })
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(value).map_err(|e| {
        anyhow::anyhow!(
            "Invalid config: {}\n\n💡 Hint: The 'format' field accepts text, dot or dgml.",
            e
        )
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        parse_format(format)?;
    }

    if let Some(ref patterns) = config.exclude_packages {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_packages[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a package name or a wildcard pattern (e.g., \"boost-*\").",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
