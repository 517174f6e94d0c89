//! Markdown rendering of the permission catalog.
//!
//! Each resource becomes a section with a heading, a scopes sentence and a
//! three-column markdown table. Cells that need lists use inline HTML,
//! since markdown tables cannot hold multi-line content.

use crate::catalog::{Action, Catalog, Endpoint, Resource};
use crate::docgen::escape::{escape_html, sentence_case, slugify};

/// Column headers of every resource table.
pub const TABLE_HEADERS: [&str; 3] = [
    "API endpoint",
    "Parameters into permissions engine",
    "Available actions / examples",
];

/// Rendered table of contents and body, as lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// One link line per resource.
    pub toc: Vec<String>,
    /// Section lines for all resources.
    pub body: Vec<String>,
}

impl RenderedTable {
    /// Renders both parts of `catalog`.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            toc: render_table_of_contents(catalog),
            body: render_body(catalog),
        }
    }
}

/// One `- [Label](#anchor)` line per resource, in catalog order.
#[must_use]
pub fn render_table_of_contents(catalog: &Catalog) -> Vec<String> {
    catalog
        .resources
        .iter()
        .map(|r| {
            format!(
                "- [{}](#{})",
                sentence_case(&r.type_name),
                slugify(&r.type_name)
            )
        })
        .collect()
}

/// Every resource section, each followed by an empty line.
#[must_use]
pub fn render_body(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for resource in &catalog.resources {
        lines.extend(render_resource(resource));
        lines.push(String::new());
    }
    lines
}

/// Heading, scopes sentence, table header and one row per endpoint.
#[must_use]
pub fn render_resource(resource: &Resource) -> Vec<String> {
    let label = sentence_case(&resource.type_name);
    let mut lines = Vec::with_capacity(resource.endpoints.len() + 4);

    lines.push(format!("## {label}\n"));

    let scopes = resource
        .scopes
        .iter()
        .map(|s| format!("**{s}**"))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!(
        "The **{label}** resource type supports the following scopes: {}\n",
        scopes.trim()
    ));

    lines.push(format!("| {} |", TABLE_HEADERS.join(" | ")));
    let separators: Vec<String> = TABLE_HEADERS.iter().map(|h| "-".repeat(h.len())).collect();
    lines.push(format!("| {} |", separators.join(" | ")));

    lines.extend(resource.endpoints.iter().map(render_endpoint));
    lines
}

/// A single table row for `endpoint`.
#[must_use]
pub fn render_endpoint(endpoint: &Endpoint) -> String {
    let path = format!("<code>{}</code>", escape_html(&endpoint.path));

    let mut params = String::from("<ul>");
    for (key, value) in &endpoint.params {
        params.push_str(&format!(
            "<li>{key}</li><ul><li><code>{}</code></li></ul>",
            escape_html(value)
        ));
    }
    params.push_str("</ul>");

    let mut actions = String::from("<ul>");
    for action in &endpoint.actions {
        actions.push_str(&render_action(action));
    }
    actions.push_str("</ul>");

    format!("| {path} | {params} | {actions} |")
}

/// An action item followed by its nested example list.
///
/// Examples use markdown backticks rather than `<code>`; the published
/// table relies on this for highlighting.
fn render_action(action: &Action) -> String {
    let mut out = format!(
        "<li><code>{}</code>: {}</li><ul>",
        escape_html(&action.name),
        action.description
    );
    for example in &action.examples {
        out.push_str(&format!("<li>`{example}`</li>"));
    }
    out.push_str("</ul>");
    out
}
