//! Permission catalog model.
//!
//! The catalog is an ordered list of resource types, each listing the API
//! endpoints it exposes and the actions a grant may name on them. It is
//! built once from static definitions and only ever read afterwards.

pub mod actions;
pub mod resources;
pub mod validate;

use std::collections::BTreeMap;

use serde::Serialize;

pub use resources::build_catalog;
pub use validate::ValidationIssue;

/// Ordered collection of resource types.
///
/// Order is significant: it drives both the table of contents and the
/// order of sections in the rendered body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Resource types in display order.
    pub resources: Vec<Resource>,
}

impl Catalog {
    /// Creates a catalog from resources in display order.
    #[must_use]
    pub const fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Checks the catalog's structural invariants.
    ///
    /// Returns every issue found; an empty list means the catalog is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate::validate_catalog(self)
    }
}

/// A category of manageable entity, e.g. "Host Catalog".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Human-readable label.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Scopes at which the resource's permissions apply, in display order.
    pub scopes: Vec<String>,
    /// Endpoints in display order.
    pub endpoints: Vec<Endpoint>,
}

impl Resource {
    /// Creates a resource.
    pub fn new(type_name: impl Into<String>, scopes: &[&str], endpoints: Vec<Endpoint>) -> Self {
        Self {
            type_name: type_name.into(),
            scopes: scopes.iter().map(ToString::to_string).collect(),
            endpoints,
        }
    }
}

/// An addressable API path plus the parameters the permission engine
/// consults for requests to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// API path; may contain the `<id>` placeholder.
    pub path: String,
    /// Parameters passed to the permissions engine. Iterates in key order.
    pub params: BTreeMap<String, String>,
    /// Actions in display order.
    pub actions: Vec<Action>,
}

impl Endpoint {
    /// Creates an endpoint.
    pub fn new(path: impl Into<String>, params: &[(&str, &str)], actions: Vec<Action>) -> Self {
        Self {
            path: path.into(),
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            actions,
        }
    }
}

/// A named operation on a resource with example grant strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Action name as it appears in grants, e.g. `read` or `read:self`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Example grant strings, in display order.
    pub examples: Vec<String>,
}

impl Action {
    /// Creates an action.
    pub fn new(name: impl Into<String>, description: impl Into<String>, examples: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            examples: examples.iter().map(ToString::to_string).collect(),
        }
    }
}
