//! Manifest serialization.
//!
//! Thin pass-through to YAML serialization; the determinism contract is the
//! load-bearing part. Output bytes depend only on the logical content of
//! the resource: struct field order fixes key order, and label maps are
//! `BTreeMap`s, so identical resources always render identically.

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize a resource to its YAML document bytes.
pub fn render<T: Serialize>(resource: &T) -> Result<Vec<u8>> {
    let yaml = serde_yaml::to_string(resource).context("failed to serialize manifest to YAML")?;
    Ok(yaml.into_bytes())
}
