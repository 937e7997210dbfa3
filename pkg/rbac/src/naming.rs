//! Name derivation for generated resources.
//!
//! Every generated name comes from these functions so the role name and the
//! binding's roleRef cannot drift apart.

use pkg_constants::manifests::{ROLE_BINDING_SUFFIX, ROLE_SUFFIX, SYSTEM_NAMESPACE_SUFFIX};

/// Name of the generated role: `<prefix>-role`.
pub fn role_name(prefix: &str) -> String {
    format!("{}{}", prefix, ROLE_SUFFIX)
}

/// Name of the generated binding: `<prefix>-rolebinding`.
pub fn role_binding_name(prefix: &str) -> String {
    format!("{}{}", prefix, ROLE_BINDING_SUFFIX)
}

/// Namespace of the bound service account: `<prefix>-system`.
pub fn system_namespace(prefix: &str) -> String {
    format!("{}{}", prefix, SYSTEM_NAMESPACE_SUFFIX)
}
