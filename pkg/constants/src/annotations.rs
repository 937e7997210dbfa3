//! RBAC annotation grammar constants.
//!
//! Annotations are line comments of the form
//! `// +rbac:groups=apps,resources=deployments,verbs=get;list;watch`.

/// Marker that introduces an RBAC annotation inside a line comment.
pub const ANNOTATION_PREFIX: &str = "+rbac:";

/// Separator between `key=value` pairs in an annotation.
pub const PAIR_SEPARATOR: char = ',';

/// Separator between values inside one `key=value` pair.
pub const VALUE_SEPARATOR: char = ';';
