//! Rule aggregation.
//!
//! Collapses the raw rule sequence from the scanner into a canonical list:
//! rules sharing the same non-verb fields merge into one rule carrying the
//! union of their verbs, and the result is ordered by rule content rather
//! than by scan order, so repeated runs over the same tree produce
//! byte-identical manifests.

use pkg_types::rbac::PolicyRule;
use std::collections::{BTreeMap, BTreeSet};

/// Grouping key: a rule's non-verb fields in canonical (sorted, deduped) form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RuleKey {
    api_groups: Vec<String>,
    resources: Vec<String>,
    resource_names: Vec<String>,
    non_resource_urls: Vec<String>,
}

fn canonical(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values.dedup();
    values
}

/// Merge and order a raw rule sequence.
///
/// Pure and total over well-formed rules; malformed rules are rejected at
/// the scanner boundary before this runs. An empty input yields an empty
/// output.
pub fn aggregate(rules: Vec<PolicyRule>) -> Vec<PolicyRule> {
    let mut groups: BTreeMap<RuleKey, BTreeSet<String>> = BTreeMap::new();
    for rule in rules {
        let key = RuleKey {
            api_groups: canonical(rule.api_groups),
            resources: canonical(rule.resources),
            resource_names: canonical(rule.resource_names),
            non_resource_urls: canonical(rule.non_resource_urls),
        };
        groups.entry(key).or_default().extend(rule.verbs);
    }

    groups
        .into_iter()
        .map(|(key, verbs)| PolicyRule {
            api_groups: key.api_groups,
            resources: key.resources,
            resource_names: key.resource_names,
            non_resource_urls: key.non_resource_urls,
            verbs: verbs.into_iter().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rule(groups: &[&str], resources: &[&str], verbs: &[&str]) -> PolicyRule {
        PolicyRule {
            api_groups: groups.iter().map(|s| s.to_string()).collect(),
            resources: resources.iter().map(|s| s.to_string()).collect(),
            resource_names: vec![],
            non_resource_urls: vec![],
            verbs: verbs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_merges_verbs_for_same_target() {
        let rules = vec![
            make_rule(&[""], &["pods"], &["get"]),
            make_rule(&[""], &["pods"], &["list"]),
        ];
        let merged = aggregate(rules);
        assert_eq!(merged, vec![make_rule(&[""], &["pods"], &["get", "list"])]);
    }

    #[test]
    fn test_distinct_targets_stay_separate() {
        let rules = vec![
            make_rule(&[""], &["pods"], &["get"]),
            make_rule(&["apps"], &["deployments"], &["get"]),
        ];
        let merged = aggregate(rules);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_duplicate_verbs_collapse() {
        let rules = vec![
            make_rule(&[""], &["pods"], &["get", "list"]),
            make_rule(&[""], &["pods"], &["list", "watch"]),
        ];
        let merged = aggregate(rules);
        assert_eq!(merged[0].verbs, vec!["get", "list", "watch"]);
    }

    #[test]
    fn test_order_is_a_function_of_content() {
        let rules = vec![
            make_rule(&["batch"], &["jobs"], &["create"]),
            make_rule(&[""], &["pods"], &["get"]),
            make_rule(&["apps"], &["deployments"], &["list"]),
        ];
        let mut permuted = rules.clone();
        permuted.rotate_left(1);
        permuted.swap(0, 1);

        assert_eq!(aggregate(rules), aggregate(permuted));
    }

    #[test]
    fn test_fields_canonicalized_within_rule() {
        let rules = vec![
            make_rule(&[""], &["services", "pods"], &["get"]),
            make_rule(&[""], &["pods", "services", "pods"], &["list"]),
        ];
        let merged = aggregate(rules);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].resources, vec!["pods", "services"]);
        assert_eq!(merged[0].verbs, vec!["get", "list"]);
    }

    #[test]
    fn test_differing_resource_names_not_set_merged() {
        let mut a = make_rule(&[""], &["configmaps"], &["get"]);
        a.resource_names = vec!["config-a".to_string()];
        let mut b = make_rule(&[""], &["configmaps"], &["get"]);
        b.resource_names = vec!["config-a".to_string(), "config-b".to_string()];

        // Overlapping but unequal name sets stay separate rules.
        let merged = aggregate(vec![a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_non_resource_rules_merge() {
        let mut a = make_rule(&[], &[], &["get"]);
        a.non_resource_urls = vec!["/healthz".to_string()];
        let mut b = make_rule(&[], &[], &["head"]);
        b.non_resource_urls = vec!["/healthz".to_string()];

        let merged = aggregate(vec![a, b]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].verbs, vec!["get", "head"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(vec![]).is_empty());
    }
}
