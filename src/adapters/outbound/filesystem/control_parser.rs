//! Parser for port `CONTROL` files
//!
//! A CONTROL file is a list of paragraphs separated by blank lines. Each
//! paragraph holds `Field: value` lines; a line starting with whitespace
//! continues the previous value. The first paragraph describes the package
//! (`Source`, `Build-Depends`), every later paragraph one feature
//! (`Feature`, `Build-Depends`).
//!
//! ```text
//! Source: curl
//! Version: 7.61.1
//! Build-Depends: zlib, openssl (!uwp), winsock2 (windows)
//!
//! Feature: http2
//! Build-Depends: nghttp2, curl[ssl]
//! ```

use crate::dependency_analysis::domain::{Feature, Package, PackageName};
use crate::shared::Result;

type Paragraph = Vec<(String, String)>;

/// Parses CONTROL file content into a package
pub fn parse_control_file(content: &str) -> Result<Package> {
    let paragraphs = split_paragraphs(content)?;
    let mut paragraphs = paragraphs.into_iter();

    let Some(core) = paragraphs.next() else {
        anyhow::bail!("CONTROL file is empty");
    };

    let source = field(&core, "Source")
        .ok_or_else(|| anyhow::anyhow!("Missing 'Source' field in the first paragraph"))?;
    let mut package = Package::new(
        PackageName::new(source.to_string())?,
        parse_dependency_list(field(&core, "Build-Depends").unwrap_or(""))?,
    );

    for (i, paragraph) in paragraphs.enumerate() {
        let name = field(&paragraph, "Feature").ok_or_else(|| {
            anyhow::anyhow!("Missing 'Feature' field in paragraph {}", i + 2)
        })?;
        let dependencies = parse_dependency_list(field(&paragraph, "Build-Depends").unwrap_or(""))?;
        package = package.with_feature(Feature::new(name.to_string(), dependencies));
    }

    Ok(package)
}

fn field<'a>(paragraph: &'a Paragraph, key: &str) -> Option<&'a str> {
    paragraph
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}

fn split_paragraphs(content: &str) -> Result<Vec<Paragraph>> {
    let mut paragraphs = Vec::new();
    let mut current: Paragraph = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            let Some((_, value)) = current.last_mut() else {
                anyhow::bail!("Line {}: continuation line without a field", line_no + 1);
            };
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(line.trim());
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            anyhow::bail!("Line {}: expected 'Field: value', got '{}'", line_no + 1, line);
        };
        current.push((key.trim().to_string(), value.trim().to_string()));
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs)
}

/// Splits a `Build-Depends` value into bare dependency names
///
/// Commas inside `[...]` feature lists do not split entries. The feature
/// list and any `(platform)` qualifier are dropped.
fn parse_dependency_list(value: &str) -> Result<Vec<PackageName>> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in value.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&value[start..]);

    entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let end = entry
                .find(|c: char| c == '[' || c == '(' || c.is_whitespace())
                .unwrap_or(entry.len());
            PackageName::new(entry[..end].to_string())
        })
        .collect()
}
