//! Centralized constants for the rbacgen project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod annotations;
pub mod defaults;
pub mod manifests;
