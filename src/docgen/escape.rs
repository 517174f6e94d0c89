//! Text helpers for the generated table: HTML escaping, anchor slugs and
//! heading case.

/// Escape `<` and `>` so placeholders like `<id>` survive inside HTML
/// table cells.
///
/// Ampersands are left alone; the catalog never contains them and existing
/// rendered output must stay byte-identical.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Anchor slug for a resource type: lowercased, spaces become dashes.
#[must_use]
pub fn slugify(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

/// Uppercase the first character and lowercase the rest of the label.
///
/// Applies to the whole label, not per word: `"Host Catalog"` becomes
/// `"Host catalog"`.
#[must_use]
pub fn sentence_case(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_placeholder() {
        assert_eq!(escape_html("/hosts/<id>"), "/hosts/&lt;id&gt;");
    }

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_html("/hosts"), "/hosts");
    }

    #[test]
    fn test_escape_leaves_ampersand() {
        assert_eq!(escape_html("a & <b>"), "a & &lt;b&gt;");
    }

    #[test]
    fn test_slugify_single_word() {
        assert_eq!(slugify("Account"), "account");
    }

    #[test]
    fn test_slugify_multi_word() {
        assert_eq!(slugify("Session Recording"), "session-recording");
    }

    #[test]
    fn test_sentence_case_multi_word() {
        assert_eq!(sentence_case("Host Catalog"), "Host catalog");
    }

    #[test]
    fn test_sentence_case_lowercase_input() {
        assert_eq!(sentence_case("auth method"), "Auth method");
    }

    #[test]
    fn test_sentence_case_shouting() {
        assert_eq!(sentence_case("SCOPE"), "Scope");
    }

    #[test]
    fn test_sentence_case_empty() {
        assert_eq!(sentence_case(""), "");
    }
}
