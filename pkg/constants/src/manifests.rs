//! Fixed values baked into the generated RBAC manifests.

// ─── Schema markers ────────────────────────────────────────────────────────

/// apiVersion stamped on both generated resources.
pub const RBAC_API_VERSION: &str = "rbac.authorization.k8s.io/v1";

/// API group referenced by the binding's roleRef.
pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// kind of the generated role resource.
pub const KIND_CLUSTER_ROLE: &str = "ClusterRole";

/// kind of the generated binding resource.
pub const KIND_CLUSTER_ROLE_BINDING: &str = "ClusterRoleBinding";

// ─── Name derivation ───────────────────────────────────────────────────────

/// Suffix appended to the name prefix to form the role name.
pub const ROLE_SUFFIX: &str = "-role";

/// Suffix appended to the name prefix to form the binding name.
pub const ROLE_BINDING_SUFFIX: &str = "-rolebinding";

/// Suffix appended to the name prefix to form the subject namespace.
pub const SYSTEM_NAMESPACE_SUFFIX: &str = "-system";

// ─── Binding subject ───────────────────────────────────────────────────────

/// Subject kind granted the role.
pub const SUBJECT_KIND_SERVICE_ACCOUNT: &str = "ServiceAccount";

/// Service account the role is granted to.
pub const DEFAULT_SUBJECT_NAME: &str = "default";

// ─── Output files ──────────────────────────────────────────────────────────

/// Filename of the generated role manifest.
pub const ROLE_MANIFEST_FILE: &str = "rbac_role.yaml";

/// Filename of the generated binding manifest.
pub const ROLE_BINDING_MANIFEST_FILE: &str = "rbac_role_binding.yaml";
