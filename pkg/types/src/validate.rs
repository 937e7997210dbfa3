use crate::rbac::PolicyRule;
use anyhow::{Result, bail};

/// Validate a Kubernetes-style resource name.
/// Rules: lowercase `[a-z0-9-]`, max 63 chars, no leading/trailing hyphens.
///
/// Applied to every name derived from the manifest name prefix, so a prefix
/// that would produce an invalid role, binding, or namespace name is
/// rejected before generation starts.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("name must not be empty");
    }
    if name.len() > 63 {
        bail!("name '{}' exceeds 63 characters (got {})", name, name.len());
    }
    if name.starts_with('-') || name.ends_with('-') {
        bail!("name '{}' must not start or end with a hyphen", name);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!(
            "name '{}' must contain only lowercase letters, digits, and hyphens [a-z0-9-]",
            name
        );
    }
    Ok(())
}

/// Validate that a policy rule is well-formed enough to render.
///
/// Enforced at the rule-source boundary, before aggregation: a rule must
/// carry at least one verb and must target either API resources or
/// non-resource URLs, not both.
pub fn validate_rule(rule: &PolicyRule) -> Result<()> {
    if rule.verbs.is_empty() {
        bail!("rule must list at least one verb");
    }
    if rule.verbs.iter().any(|v| v.is_empty()) {
        bail!("rule verbs must not be empty strings");
    }

    let targets_resources = !rule.api_groups.is_empty()
        || !rule.resources.is_empty()
        || !rule.resource_names.is_empty();
    let targets_urls = !rule.non_resource_urls.is_empty();

    if targets_resources && targets_urls {
        bail!("rule cannot target both API resources and non-resource URLs");
    }
    if !targets_resources && !targets_urls {
        bail!("rule must target API resources (groups + resources) or non-resource URLs");
    }
    if targets_resources {
        if rule.api_groups.is_empty() {
            bail!("rule targeting API resources must list at least one API group");
        }
        if rule.resources.is_empty() {
            bail!("rule targeting API resources must list at least one resource");
        }
    }
    Ok(())
}
