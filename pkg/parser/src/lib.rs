//! Rule source for RBAC manifest generation.
//!
//! Scans a directory tree of Rust sources for `// +rbac:` annotation
//! comments and decodes them into policy rules. Malformed annotations fail
//! the scan with the offending file and line; canonical ordering of the
//! result is the aggregator's job, not the scanner's.

mod annotation;

pub use annotation::parse_annotation;

use anyhow::{Context, Result};
use pkg_constants::annotations::ANNOTATION_PREFIX;
use pkg_types::rbac::PolicyRule;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Collect all RBAC annotation rules under `dir`, in discovery order.
///
/// Only `.rs` files are scanned. Files are visited in sorted path order so
/// diagnostics are stable, but callers must not rely on rule order — the
/// aggregator canonicalizes it.
pub fn parse_dir(dir: &Path) -> Result<Vec<PolicyRule>> {
    let mut rules = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to scan input directory '{}'", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        rules.extend(parse_file(entry.path())?);
    }
    debug!("Discovered {} RBAC rule(s) under {}", rules.len(), dir.display());
    Ok(rules)
}

/// Collect the RBAC annotation rules from a single source file.
pub fn parse_file(path: &Path) -> Result<Vec<PolicyRule>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read source file '{}'", path.display()))?;

    let mut rules = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let Some(body) = annotation_body(line) else {
            continue;
        };
        let rule = annotation::parse_annotation(body).with_context(|| {
            format!("invalid RBAC annotation at {}:{}", path.display(), idx + 1)
        })?;
        rules.push(rule);
    }
    Ok(rules)
}

/// Extract the annotation body from a line, if the line is an RBAC
/// annotation comment. Both `//` and `///` comment forms are recognized.
fn annotation_body(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with("//") {
        return None;
    }
    let comment = trimmed.trim_start_matches('/').trim_start();
    comment.strip_prefix(ANNOTATION_PREFIX).map(str::trim)
}
