//! Pure builders for the two generated resources.

use crate::naming;
use crate::options::ManifestOptions;
use pkg_constants::manifests::{
    DEFAULT_SUBJECT_NAME, KIND_CLUSTER_ROLE, KIND_CLUSTER_ROLE_BINDING, RBAC_API_GROUP,
    RBAC_API_VERSION, SUBJECT_KIND_SERVICE_ACCOUNT,
};
use pkg_types::rbac::{ClusterRole, ClusterRoleBinding, ObjectMeta, PolicyRule, RoleRef, Subject};

/// Build the aggregated role carrying the canonical rule list.
///
/// Rules are taken verbatim — merging and ordering happened in the
/// aggregator.
pub fn build_cluster_role(rules: Vec<PolicyRule>, options: &ManifestOptions) -> ClusterRole {
    ClusterRole {
        api_version: RBAC_API_VERSION.to_string(),
        kind: KIND_CLUSTER_ROLE.to_string(),
        metadata: ObjectMeta {
            name: naming::role_name(&options.name),
            labels: options.labels.clone(),
        },
        rules,
    }
}

/// Build the binding that grants the role to the controller's default
/// service account in the `<name>-system` namespace.
pub fn build_cluster_role_binding(options: &ManifestOptions) -> ClusterRoleBinding {
    ClusterRoleBinding {
        api_version: RBAC_API_VERSION.to_string(),
        kind: KIND_CLUSTER_ROLE_BINDING.to_string(),
        metadata: ObjectMeta {
            name: naming::role_binding_name(&options.name),
            labels: options.labels.clone(),
        },
        subjects: vec![Subject {
            kind: SUBJECT_KIND_SERVICE_ACCOUNT.to_string(),
            name: DEFAULT_SUBJECT_NAME.to_string(),
            namespace: naming::system_namespace(&options.name),
        }],
        role_ref: RoleRef {
            api_group: RBAC_API_GROUP.to_string(),
            kind: KIND_CLUSTER_ROLE.to_string(),
            name: naming::role_name(&options.name),
        },
    }
}
