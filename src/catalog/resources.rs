//! The static catalog of resource types.

use super::actions::{create_list_actions, list_only_actions, read_update_delete_actions};
use super::{Action, Catalog, Endpoint, Resource};

const IAM_SCOPES: &[&str] = &["Global", "Org"];
const INFRA_SCOPES: &[&str] = &["Project"];
const ALL_SCOPES: &[&str] = &["Global", "Org", "Project"];

/// Builds the full catalog in published order.
#[must_use]
pub fn build_catalog() -> Catalog {
    Catalog::new(vec![
        account(),
        auth_method(),
        auth_token(),
        group(),
        host(),
        host_catalog(),
        host_set(),
        managed_group(),
        role(),
        scope(),
        session(),
        session_recording(),
        storage_bucket(),
        target(),
        user(),
        worker(),
    ])
}

/// `read`/`update`/`delete` followed by extra actions.
fn with_rud(subject: &str, has_pin: bool, extra: Vec<Action>) -> Vec<Action> {
    let mut actions = read_update_delete_actions(subject, has_pin);
    actions.extend(extra);
    actions
}

/// An action whose examples are the id form and, optionally, the pin form.
fn item_action(name: &str, description: &str, has_pin: bool) -> Action {
    let mut examples = vec![format!("ids=<id>;actions={name}")];
    if has_pin {
        examples.push(format!("ids=<pin>;type=<type>;actions={name}"));
    }
    Action {
        name: name.to_string(),
        description: description.to_string(),
        examples,
    }
}

/// The add/set/remove triple used for membership-style collections.
fn add_set_remove(noun: &str, owner: &str, has_pin: bool) -> Vec<Action> {
    vec![
        item_action(
            &format!("add-{noun}"),
            &format!("Add {} to {owner}", noun.replace('-', " ")),
            has_pin,
        ),
        item_action(
            &format!("set-{noun}"),
            &format!("Set the full set of {} on {owner}", noun.replace('-', " ")),
            has_pin,
        ),
        item_action(
            &format!("remove-{noun}"),
            &format!("Remove {} from {owner}", noun.replace('-', " ")),
            has_pin,
        ),
    ]
}

fn account() -> Resource {
    Resource::new(
        "Account",
        IAM_SCOPES,
        vec![
            Endpoint::new(
                "/accounts",
                &[("Type", "account")],
                create_list_actions("an account"),
            ),
            Endpoint::new(
                "/accounts/<id>",
                &[("ID", "<id>"), ("Type", "account"), ("Pin", "<auth-method-id>")],
                with_rud(
                    "an account",
                    true,
                    vec![
                        item_action(
                            "set-password",
                            "Set a password on an account, without requiring the current password",
                            true,
                        ),
                        item_action(
                            "change-password",
                            "Change a password on an account given the current password",
                            true,
                        ),
                    ],
                ),
            ),
        ],
    )
}

fn auth_method() -> Resource {
    Resource::new(
        "Auth Method",
        IAM_SCOPES,
        vec![
            Endpoint::new(
                "/auth-methods",
                &[("Type", "auth-method")],
                create_list_actions("an auth method"),
            ),
            Endpoint::new(
                "/auth-methods/<id>",
                &[("ID", "<id>"), ("Type", "auth-method")],
                with_rud(
                    "an auth method",
                    false,
                    vec![item_action(
                        "authenticate",
                        "Authenticate to an auth method",
                        false,
                    )],
                ),
            ),
        ],
    )
}

fn auth_token() -> Resource {
    Resource::new(
        "Auth Token",
        IAM_SCOPES,
        vec![
            Endpoint::new(
                "/auth-tokens",
                &[("Type", "auth-token")],
                list_only_actions("an auth token"),
            ),
            Endpoint::new(
                "/auth-tokens/<id>",
                &[("ID", "<id>"), ("Type", "auth-token")],
                vec![
                    item_action("read", "Read an auth token", false),
                    item_action("delete", "Delete an auth token", false),
                ],
            ),
        ],
    )
}

fn group() -> Resource {
    Resource::new(
        "Group",
        ALL_SCOPES,
        vec![
            Endpoint::new("/groups", &[("Type", "group")], create_list_actions("a group")),
            Endpoint::new(
                "/groups/<id>",
                &[("ID", "<id>"), ("Type", "group")],
                with_rud("a group", false, add_set_remove("members", "a group", false)),
            ),
        ],
    )
}

fn host() -> Resource {
    Resource::new(
        "Host",
        INFRA_SCOPES,
        vec![
            Endpoint::new("/hosts", &[("Type", "host")], create_list_actions("a host")),
            Endpoint::new(
                "/hosts/<id>",
                &[("ID", "<id>"), ("Type", "host"), ("Pin", "<host-catalog-id>")],
                read_update_delete_actions("a host", true),
            ),
        ],
    )
}

fn host_catalog() -> Resource {
    Resource::new(
        "Host Catalog",
        INFRA_SCOPES,
        vec![
            Endpoint::new(
                "/host-catalogs",
                &[("Type", "host-catalog")],
                create_list_actions("a host catalog"),
            ),
            Endpoint::new(
                "/host-catalogs/<id>",
                &[("ID", "<id>"), ("Type", "host-catalog")],
                read_update_delete_actions("a host catalog", false),
            ),
        ],
    )
}

fn host_set() -> Resource {
    Resource::new(
        "Host Set",
        INFRA_SCOPES,
        vec![
            Endpoint::new(
                "/host-sets",
                &[("Type", "host-set")],
                create_list_actions("a host set"),
            ),
            Endpoint::new(
                "/host-sets/<id>",
                &[("ID", "<id>"), ("Type", "host-set"), ("Pin", "<host-catalog-id>")],
                with_rud(
                    "a host set",
                    true,
                    vec![
                        // "host-set" is hyphenated in the published text
                        item_action("add-hosts", "Add hosts to a host-set", true),
                        item_action("set-hosts", "Set the full set of hosts on a host set", true),
                        item_action("remove-hosts", "Remove hosts from a host set", true),
                    ],
                ),
            ),
        ],
    )
}

fn managed_group() -> Resource {
    Resource::new(
        "Managed Group",
        IAM_SCOPES,
        vec![
            Endpoint::new(
                "/managed-groups",
                &[("Type", "managed-group")],
                create_list_actions("a managed group"),
            ),
            Endpoint::new(
                "/managed-groups/<id>",
                &[("ID", "<id>"), ("Type", "managed-group"), ("Pin", "<auth-method-id>")],
                read_update_delete_actions("a managed group", true),
            ),
        ],
    )
}

fn role() -> Resource {
    let mut extra = add_set_remove("principals", "a role", false);
    extra.extend(add_set_remove("grants", "a role", false));

    Resource::new(
        "Role",
        ALL_SCOPES,
        vec![
            Endpoint::new("/roles", &[("Type", "role")], create_list_actions("a role")),
            Endpoint::new(
                "/roles/<id>",
                &[("ID", "<id>"), ("Type", "role")],
                with_rud("a role", false, extra),
            ),
        ],
    )
}

fn scope() -> Resource {
    Resource::new(
        "Scope",
        IAM_SCOPES,
        vec![
            Endpoint::new("/scopes", &[("Type", "scope")], create_list_actions("a scope")),
            Endpoint::new(
                "/scopes/<id>",
                &[("ID", "<id>"), ("Type", "scope")],
                read_update_delete_actions("a scope", false),
            ),
        ],
    )
}

fn session() -> Resource {
    Resource::new(
        "Session",
        INFRA_SCOPES,
        vec![
            Endpoint::new("/sessions", &[("Type", "session")], list_only_actions("a session")),
            Endpoint::new(
                "/session/<id>",
                &[("ID", "<id>"), ("Type", "session")],
                vec![
                    item_action("read", "Read a session", false),
                    item_action("cancel", "Cancel a session", false),
                    Action::new(
                        "read:self",
                        "Read a session, which must be associated with the calling user",
                        &["ids=*;type=session;actions=read:self"],
                    ),
                    Action::new(
                        "cancel:self",
                        "Cancel a session, which must be associated with the calling user",
                        &["ids=*;type=session;actions=cancel:self"],
                    ),
                ],
            ),
        ],
    )
}

fn session_recording() -> Resource {
    Resource::new(
        "Session Recording",
        IAM_SCOPES,
        vec![
            Endpoint::new(
                "/session-recordings",
                &[("Type", "session-recording")],
                list_only_actions("a session recording"),
            ),
            Endpoint::new(
                "/session-recordings/<id>",
                &[("ID", "<id>"), ("Type", "session-recording")],
                vec![
                    item_action("read", "Read a session recording", false),
                    item_action("download", "Download a session recording", false),
                    item_action(
                        "reapply-storage-policy",
                        "Reapply the storage policy to a session recording",
                        false,
                    ),
                    item_action("delete", "Delete a session recording", false),
                ],
            ),
        ],
    )
}

fn storage_bucket() -> Resource {
    Resource::new(
        "Storage Bucket",
        IAM_SCOPES,
        vec![
            Endpoint::new(
                "/storage-buckets",
                &[("Type", "storage-bucket")],
                create_list_actions("a storage bucket"),
            ),
            Endpoint::new(
                "/storage-buckets/<id>",
                &[("ID", "<id>"), ("Type", "storage-bucket")],
                read_update_delete_actions("a storage bucket", false),
            ),
        ],
    )
}

fn target() -> Resource {
    let mut extra = add_set_remove("host-sources", "a target", false);
    extra.extend(add_set_remove("credential-sources", "a target", false));
    extra.push(item_action(
        "authorize-session",
        "Authorize a session via the target",
        false,
    ));

    Resource::new(
        "Target",
        INFRA_SCOPES,
        vec![
            Endpoint::new("/targets", &[("Type", "target")], create_list_actions("a target")),
            Endpoint::new(
                "/targets/<id>",
                &[("ID", "<id>"), ("Type", "target")],
                with_rud("a target", false, extra),
            ),
        ],
    )
}

fn user() -> Resource {
    Resource::new(
        "User",
        IAM_SCOPES,
        vec![
            Endpoint::new("/users", &[("Type", "user")], create_list_actions("a user")),
            Endpoint::new(
                "/users/<id>",
                &[("ID", "<id>"), ("Type", "user")],
                with_rud("a user", false, add_set_remove("accounts", "a user", false)),
            ),
        ],
    )
}

fn worker() -> Resource {
    let mut collection = list_only_actions("a worker");
    collection.push(Action::new(
        "create:controller-led",
        "Create a worker using the controller-led workflow",
        &[
            "type=<type>;actions=create",
            "type=<type>;actions=create:controller-led",
        ],
    ));
    collection.push(Action::new(
        "create:worker-led",
        "Create a worker using the worker-led workflow",
        &[
            "type=<type>;actions=create",
            "type=<type>;actions=create:worker-led",
        ],
    ));

    Resource::new(
        "Worker",
        &["Global"],
        vec![
            Endpoint::new("/workers", &[("Type", "worker")], collection),
            Endpoint::new(
                "/workers/<id>",
                &[("ID", "<id>"), ("Type", "worker")],
                read_update_delete_actions("a worker", false),
            ),
        ],
    )
}
