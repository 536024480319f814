//! Realm name normalization and host/realm resolution
//!
//! Pure functions: for a given realm-name set and input string the result is
//! always the same, which keeps resolution cacheable and trivially testable.
//! The registry's resolution methods delegate here.

use std::borrow::Cow;
use std::collections::HashSet;

/// Characters that delimit words in a request host name
const HOST_WORD_BOUNDARY: &[char] = &['.', '-'];

/// Strip the leading slash from a realm identifier, yielding canonical form
pub fn strip_leading_slash(realm: &str) -> &str {
    realm.strip_prefix('/').unwrap_or(realm)
}

/// Prefix a realm name with a slash, yielding display form
pub fn ensure_leading_slash(realm: &str) -> Cow<'_, str> {
    if realm.starts_with('/') {
        Cow::Borrowed(realm)
    } else {
        Cow::Owned(format!("/{realm}"))
    }
}

/// Find the configured realm whose canonical name appears as a word in `host`
///
/// The host is split on `.` and `-`; a realm matches iff its canonical form
/// equals one of the resulting tokens. When several realms match, the
/// lexicographically smallest wins as a deterministic tie-break.
pub fn find_realm_in_host(realm_names: &HashSet<String>, host: &str) -> Option<String> {
    let host_parts: HashSet<&str> = host.split(HOST_WORD_BOUNDARY).collect();
    realm_names
        .iter()
        .filter(|realm| host_parts.contains(strip_leading_slash(realm.as_str())))
        .min()
        .cloned()
}

/// Find the configured realm matching `realm`, ignoring a leading slash on
/// either side. Same tie-break as [`find_realm_in_host`].
pub fn find_realm_in_realm(realm_names: &HashSet<String>, realm: &str) -> Option<String> {
    let stripped = strip_leading_slash(realm);
    realm_names
        .iter()
        .filter(|candidate| strip_leading_slash(candidate.as_str()) == stripped)
        .min()
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/customers"), "customers");
        assert_eq!(strip_leading_slash("customers"), "customers");
        assert_eq!(strip_leading_slash(""), "");
        // Only the first slash is stripped
        assert_eq!(strip_leading_slash("//x"), "/x");
    }

    #[test]
    fn test_ensure_leading_slash() {
        assert_eq!(ensure_leading_slash("customers"), "/customers");
        assert_eq!(ensure_leading_slash("/customers"), "/customers");
    }

    #[test]
    fn test_host_match_on_subdomain() {
        let realms = names(&["customers"]);
        assert_eq!(
            find_realm_in_host(&realms, "api.customers.example.com"),
            Some("customers".to_string())
        );
    }

    #[test]
    fn test_host_tokenizes_on_dot_and_dash() {
        let realms = names(&["foo", "bar", "example"]);
        // "foo-bar.example.com" matches all three; tie-break picks "bar"
        assert_eq!(
            find_realm_in_host(&realms, "foo-bar.example.com"),
            Some("bar".to_string())
        );
    }

    #[test]
    fn test_host_requires_whole_token_match() {
        let realms = names(&["custom"]);
        // "custom" is a prefix of the token "customers", not a token itself
        assert_eq!(find_realm_in_host(&realms, "api.customers.example.com"), None);
    }

    #[test]
    fn test_host_miss_is_none() {
        let realms = names(&["foo"]);
        assert_eq!(find_realm_in_host(&realms, "unrelated.host.com"), None);
    }

    #[test]
    fn test_host_consecutive_separators() {
        let realms = names(&["customers"]);
        assert_eq!(
            find_realm_in_host(&realms, "customers--.example..com"),
            Some("customers".to_string())
        );
    }

    #[test]
    fn test_realm_match_ignores_leading_slash_on_both_sides() {
        let realms = names(&["customers"]);
        assert_eq!(
            find_realm_in_realm(&realms, "customers"),
            Some("customers".to_string())
        );
        assert_eq!(
            find_realm_in_realm(&realms, "/customers"),
            Some("customers".to_string())
        );

        let slashed = names(&["/customers"]);
        assert_eq!(
            find_realm_in_realm(&slashed, "customers"),
            Some("/customers".to_string())
        );
    }

    #[test]
    fn test_realm_match_is_case_sensitive() {
        let realms = names(&["customers"]);
        assert_eq!(find_realm_in_realm(&realms, "Customers"), None);
    }

    #[test]
    fn test_realm_miss_is_none() {
        let realms = names(&["customers"]);
        assert_eq!(find_realm_in_realm(&realms, "employees"), None);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let realms = names(&["foo", "bar", "example"]);
        let first = find_realm_in_host(&realms, "foo-bar.example.com");
        let second = find_realm_in_host(&realms, "foo-bar.example.com");
        assert_eq!(first, second);

        let first = find_realm_in_realm(&realms, "/foo");
        let second = find_realm_in_realm(&realms, "/foo");
        assert_eq!(first, second);
    }
}
