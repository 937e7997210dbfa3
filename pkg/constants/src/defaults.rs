//! Default generation option values.

/// Default name prefix for generated manifest identifiers.
pub const DEFAULT_NAME: &str = "manager";

/// Default input directory scanned for RBAC annotations.
pub const DEFAULT_INPUT_DIR: &str = "./pkg";

/// Default output directory for generated manifests.
pub const DEFAULT_OUTPUT_DIR: &str = "./config";
