use crate::naming;
use anyhow::{Result, bail};
use pkg_constants::defaults::{DEFAULT_INPUT_DIR, DEFAULT_NAME, DEFAULT_OUTPUT_DIR};
use pkg_types::validate::validate_name;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Options for one manifest generation run.
///
/// The pipeline is a pure function of this struct — no ambient state.
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// Name prefix every generated identifier derives from.
    pub name: String,
    /// Directory scanned for RBAC annotations.
    pub input_dir: PathBuf,
    /// Directory the generated manifests are written to.
    pub output_dir: PathBuf,
    /// Labels stamped onto both generated resources.
    pub labels: BTreeMap<String, String>,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            labels: BTreeMap::new(),
        }
    }
}

impl ManifestOptions {
    /// Validate the options. Runs once, before generation starts.
    ///
    /// The name prefix is checked through every name derived from it, so a
    /// prefix that is valid on its own but overflows the 63-character limit
    /// once suffixed is rejected here rather than by the cluster later.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("name prefix must not be empty");
        }
        validate_name(&naming::role_name(&self.name))?;
        validate_name(&naming::role_binding_name(&self.name))?;
        validate_name(&naming::system_namespace(&self.name))?;

        if !self.input_dir.is_dir() {
            bail!("invalid input directory '{}'", self.input_dir.display());
        }
        if !self.output_dir.is_dir() {
            bail!("invalid output directory '{}'", self.output_dir.display());
        }
        Ok(())
    }
}
