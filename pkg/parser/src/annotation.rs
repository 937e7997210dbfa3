use anyhow::{Result, bail};
use pkg_constants::annotations::{PAIR_SEPARATOR, VALUE_SEPARATOR};
use pkg_types::rbac::PolicyRule;
use pkg_types::validate::validate_rule;

/// Decode one annotation body into a policy rule.
///
/// The body is everything after the `+rbac:` marker, e.g.
/// `groups=apps,resources=deployments,verbs=get;list;watch`. Pairs are
/// `,`-separated, values inside a pair are `;`-separated. Values may be
/// double-quoted; `groups=""` names the core API group.
pub fn parse_annotation(body: &str) -> Result<PolicyRule> {
    let mut rule = PolicyRule {
        api_groups: vec![],
        resources: vec![],
        resource_names: vec![],
        non_resource_urls: vec![],
        verbs: vec![],
    };

    for pair in body.split(PAIR_SEPARATOR) {
        let pair = pair.trim();
        if pair.is_empty() {
            bail!("empty 'key=value' pair in annotation '{}'", body);
        }
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected 'key=value', got '{}'", pair);
        };
        let values = split_values(value);
        match key.trim() {
            "groups" => rule.api_groups = values,
            "resources" => rule.resources = values,
            "resourceNames" => rule.resource_names = values,
            "urls" => rule.non_resource_urls = values,
            "verbs" => rule.verbs = values,
            other => bail!("unknown annotation key '{}'", other),
        }
    }

    validate_rule(&rule)?;
    Ok(rule)
}

/// Split a pair value into its `;`-separated parts, trimming surrounding
/// whitespace and quotes from each part.
fn split_values(value: &str) -> Vec<String> {
    value
        .split(VALUE_SEPARATOR)
        .map(|v| v.trim().trim_matches('"').to_string())
        .collect()
}
