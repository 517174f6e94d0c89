//! Constructors for the action sets most resources share.

use super::Action;

/// Strips a leading indefinite article from a subject label.
fn strip_article(subject: &str) -> &str {
    let subject = subject.strip_prefix("an ").unwrap_or(subject);
    subject.strip_prefix("a ").unwrap_or(subject)
}

/// A single `list` action for a collection.
///
/// `subject` is a label with its article, e.g. `"an account"`; the
/// description pluralises it naively as `"List accounts"`.
#[must_use]
pub fn list_only_actions(subject: &str) -> Vec<Action> {
    vec![Action::new(
        "list",
        format!("List {}s", strip_article(subject)),
        &["type=<type>;actions=list"],
    )]
}

/// `create` followed by `list`.
#[must_use]
pub fn create_list_actions(subject: &str) -> Vec<Action> {
    let mut actions = vec![Action::new(
        "create",
        format!("Create {subject}"),
        &["type=<type>;actions=create"],
    )];
    actions.extend(list_only_actions(subject));
    actions
}

/// `read`, `update` and `delete` on a single item.
///
/// With `has_pin`, each action also gets a pin-scoped example for
/// resources that always live under a parent.
#[must_use]
pub fn read_update_delete_actions(subject: &str, has_pin: bool) -> Vec<Action> {
    [("read", "Read"), ("update", "Update"), ("delete", "Delete")]
        .into_iter()
        .map(|(verb, title)| {
            let mut examples = vec![format!("ids=<id>;actions={verb}")];
            if has_pin {
                examples.push(format!("ids=<pin>;type=<type>;actions={verb}"));
            }
            Action {
                name: verb.to_string(),
                description: format!("{title} {subject}"),
                examples,
            }
        })
        .collect()
}
