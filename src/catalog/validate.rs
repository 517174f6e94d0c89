//! Structural checks over a catalog.
//!
//! Detects empty sections, duplicate action names and anchors that would
//! collide in the rendered table of contents.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{Catalog, Endpoint};
use crate::docgen::escape::slugify;

/// A single invariant violation with its location in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Location, e.g. `resources[3].endpoints[1]`.
    pub location: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Validate every resource, endpoint and action in `catalog`.
#[must_use]
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut anchors: HashMap<String, usize> = HashMap::new();

    for (i, resource) in catalog.resources.iter().enumerate() {
        let location = format!("resources[{i}]");

        if resource.type_name.trim().is_empty() {
            issues.push(issue(&location, "resource type label is empty"));
        }

        let anchor = slugify(&resource.type_name);
        let first = *anchors.entry(anchor.clone()).or_insert(i);
        if first != i {
            issues.push(issue(
                &location,
                format!("anchor #{anchor} collides with resources[{first}]"),
            ));
        }

        if resource.scopes.is_empty() {
            issues.push(issue(&location, "resource has no scopes"));
        }

        if resource.endpoints.is_empty() {
            issues.push(issue(&location, "resource has no endpoints"));
        }

        for (j, endpoint) in resource.endpoints.iter().enumerate() {
            validate_endpoint(endpoint, &format!("{location}.endpoints[{j}]"), &mut issues);
        }
    }

    issues
}

fn validate_endpoint(endpoint: &Endpoint, location: &str, issues: &mut Vec<ValidationIssue>) {
    if endpoint.actions.is_empty() {
        issues.push(issue(location, "endpoint has no actions"));
    }

    let mut seen = HashSet::new();
    for (k, action) in endpoint.actions.iter().enumerate() {
        if !seen.insert(action.name.as_str()) {
            issues.push(issue(
                &format!("{location}.actions[{k}]"),
                format!("duplicate action name \"{}\"", action.name),
            ));
        }
    }
}

fn issue(location: &str, message: impl Into<String>) -> ValidationIssue {
    ValidationIssue {
        location: location.to_string(),
        message: message.into(),
    }
}
