//! The generation driver.
//!
//! Linear pipeline: Validate → Scan → Aggregate → Build → Render → Write.
//! Any failure aborts the run; the two file writes are not transactional
//! with respect to each other — a rerun overwrites both files.

use crate::aggregate::aggregate;
use crate::manifests::{build_cluster_role, build_cluster_role_binding};
use crate::options::ManifestOptions;
use crate::render::render;
use anyhow::{Context, Result};
use pkg_constants::manifests::{ROLE_BINDING_MANIFEST_FILE, ROLE_MANIFEST_FILE};
use std::fs;
use tracing::info;

/// Generate RBAC manifests from the annotations in the input directory.
///
/// Zero discovered rules is a documented no-op: nothing is written and the
/// run succeeds.
pub fn generate(options: &ManifestOptions) -> Result<()> {
    options.validate()?;

    let rules = pkg_parser::parse_dir(&options.input_dir)
        .with_context(|| format!("failed to parse input dir '{}'", options.input_dir.display()))?;
    if rules.is_empty() {
        info!(
            "No RBAC annotations found under '{}', nothing to generate",
            options.input_dir.display()
        );
        return Ok(());
    }

    let rules = aggregate(rules);
    info!("Aggregated {} RBAC rule(s)", rules.len());

    let role = build_cluster_role(rules, options);
    let binding = build_cluster_role_binding(options);

    let role_yaml = render(&role).context("failed to generate role manifest")?;
    let binding_yaml = render(&binding).context("failed to generate role binding manifest")?;

    let role_file = options.output_dir.join(ROLE_MANIFEST_FILE);
    fs::write(&role_file, role_yaml)
        .with_context(|| format!("failed to write role manifest '{}'", role_file.display()))?;

    let binding_file = options.output_dir.join(ROLE_BINDING_MANIFEST_FILE);
    fs::write(&binding_file, binding_yaml).with_context(|| {
        format!(
            "failed to write role binding manifest '{}'",
            binding_file.display()
        )
    })?;

    info!(
        "Wrote {} and {}",
        role_file.display(),
        binding_file.display()
    );
    Ok(())
}
