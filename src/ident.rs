//! Identifier normalization for event names.
//!
//! Free-text feature names and action labels are reduced to canonical
//! lowercase, underscore-delimited identifiers. Event identifiers join the
//! feature slug and the label slug with a double underscore; that separator
//! is a fixed convention the taxonomy checks rely on.

/// Normalize free text into a `[a-z0-9_]` identifier.
///
/// Lowercases the trimmed input, replaces every maximal run of characters
/// outside `[a-z0-9]` with a single underscore and strips leading/trailing
/// underscores. Idempotent: `slugify(slugify(x)) == slugify(x)`. Empty or
/// all-punctuation input yields an empty string; callers are expected to
/// avoid that, it is not validated here.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_matches('_').to_string()
}

/// Compose the canonical event identifier for a feature/label pair.
///
/// The double underscore separates feature scope from label scope and must
/// be preserved exactly.
pub fn event_identifier(feature_name: &str, label: &str) -> String {
    format!("{}__{}", slugify(feature_name), slugify(label))
}

/// Uppercase the first character and lowercase the rest.
///
/// Used for friendly names ("share" -> "Share", "CLICK CTA" -> "Click cta").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Open Share Dialog"), "open_share_dialog");
        assert_eq!(slugify("a b"), "a_b");
        assert_eq!(slugify("Sync!"), "sync");
        assert_eq!(slugify("  spaced  out  "), "spaced_out");
    }

    #[test]
    fn slugify_collapses_runs_and_strips_edges() {
        assert_eq!(slugify("--a///b__c--"), "a_b_c");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_keeps_digits() {
        assert_eq!(slugify("Plan 2.0 launch"), "plan_2_0_launch");
    }

    #[test]
    fn event_identifier_uses_double_underscore() {
        assert_eq!(event_identifier("share", "click invite"), "share__click_invite");
        assert_eq!(event_identifier("a b", "view"), "a_b__view");
        // Empty feature degrades to a degenerate but well-formed identifier.
        assert_eq!(event_identifier("", "action"), "__action");
    }

    #[test]
    fn capitalize_matches_friendly_name_convention() {
        assert_eq!(capitalize("view"), "View");
        assert_eq!(capitalize("click invite"), "Click invite");
        assert_eq!(capitalize("CLICK CTA"), "Click cta");
        assert_eq!(capitalize(""), "");
    }

    proptest! {
        #[test]
        fn slugify_is_idempotent_and_canonical(s in ".{0,64}") {
            let once = slugify(&s);
            prop_assert_eq!(slugify(&once), once.clone());
            prop_assert!(once
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
            prop_assert!(!once.starts_with('_'));
            prop_assert!(!once.ends_with('_'));
            prop_assert!(!once.contains("__"));
        }
    }
}
