//! Profile derivation
//!
//! Pure fallback generation for the optional profile fields. The cached
//! user object only guarantees `name` and `email`; `username` and `bio`
//! are filled in here when absent. Derivation runs once at load time and
//! never overwrites a field the user has already set.

use crate::models::UserProfile;

/// Fallback display name when the stored name is empty.
pub const NAME_FALLBACK: &str = "User";

/// Fallback username when the name contains no eligible characters.
///
/// The empty-name/empty-result case was unhandled upstream; a derived
/// username must never be empty, so it bottoms out here.
pub const USERNAME_FALLBACK: &str = "user";

/// Resolve the name to display, substituting the fallback for empty input.
#[must_use]
pub fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        NAME_FALLBACK
    } else {
        name
    }
}

/// Derive a username from a display name.
///
/// Lowercases the name, replaces every run of whitespace with a single
/// underscore, then strips every character outside `[a-z0-9_]`.
///
/// # Examples
///
/// ```
/// use finvault_core::profile::derive_username;
///
/// assert_eq!(derive_username("Arjun Kumar"), "arjun_kumar");
/// assert_eq!(derive_username("!!!"), "user");
/// ```
#[must_use]
pub fn derive_username(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                result.push('_');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            result.push(ch);
        }
    }

    if result.is_empty() {
        USERNAME_FALLBACK.to_string()
    } else {
        result
    }
}

/// Derive a bio from a display name.
#[must_use]
pub fn derive_bio(name: &str) -> String {
    format!(
        "Financial enthusiast. Tracking expenses and planning for the future with {}'s portfolio.",
        display_name(name)
    )
}

/// Fill in the missing optional fields of a cached profile.
///
/// Only absent or empty `username`/`bio` are derived; anything the user
/// already set passes through untouched. Infallible and deterministic.
#[must_use]
pub fn complete_profile(cached: UserProfile) -> UserProfile {
    let name = display_name(&cached.name).to_string();

    let username = match cached.username {
        Some(username) if !username.trim().is_empty() => username,
        _ => derive_username(&cached.name),
    };

    let bio = match cached.bio {
        Some(bio) if !bio.trim().is_empty() => bio,
        _ => derive_bio(&cached.name),
    };

    UserProfile {
        name,
        email: cached.email,
        username: Some(username),
        bio: Some(bio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_derive_username_basic() {
        assert_eq!(derive_username("Arjun Kumar"), "arjun_kumar");
    }

    #[test]
    fn test_derive_username_collapses_whitespace_runs() {
        assert_eq!(derive_username("Priya   \t Singh"), "priya_singh");
    }

    #[test]
    fn test_derive_username_strips_ineligible_characters() {
        assert_eq!(derive_username("Amélie O'Brien-Smith"), "amlie_obriensmith");
        assert_eq!(derive_username("user@42!"), "user42");
    }

    #[test]
    fn test_derive_username_charset() {
        for name in ["Arjun Kumar", "  spaced  out  ", "MiXeD CaSe 99", "a-b.c"] {
            let username = derive_username(name);
            assert!(username
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
            assert!(!username.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_derive_username_fallback_when_nothing_eligible() {
        assert_eq!(derive_username(""), "user");
        assert_eq!(derive_username("!!!"), "user");
    }

    #[test]
    fn test_derive_username_idempotent() {
        let once = derive_username("Arjun Kumar");
        assert_eq!(derive_username(&once), once);
    }

    #[test]
    fn test_derive_bio_template() {
        assert_eq!(
            derive_bio("Arjun"),
            "Financial enthusiast. Tracking expenses and planning for the future with Arjun's portfolio."
        );
    }

    #[test]
    fn test_derive_bio_empty_name_uses_fallback() {
        assert_eq!(
            derive_bio("  "),
            "Financial enthusiast. Tracking expenses and planning for the future with User's portfolio."
        );
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name(""), "User");
        assert_eq!(display_name("   "), "User");
        assert_eq!(display_name("Priya"), "Priya");
    }

    #[test]
    fn test_complete_profile_derives_missing_fields() {
        let profile = complete_profile(UserProfile {
            name: "Priya Singh".to_string(),
            email: "p@x.com".to_string(),
            username: None,
            bio: None,
        });

        assert_eq!(profile.username.as_deref(), Some("priya_singh"));
        assert_eq!(
            profile.bio.as_deref(),
            Some("Financial enthusiast. Tracking expenses and planning for the future with Priya Singh's portfolio.")
        );
    }

    #[test]
    fn test_complete_profile_preserves_user_edits() {
        let profile = complete_profile(UserProfile {
            name: "X".to_string(),
            email: "x@x.com".to_string(),
            username: Some("custom".to_string()),
            bio: Some("my own bio".to_string()),
        });

        assert_eq!(profile.username.as_deref(), Some("custom"));
        assert_eq!(profile.bio.as_deref(), Some("my own bio"));
    }

    #[test]
    fn test_complete_profile_treats_empty_strings_as_absent() {
        let profile = complete_profile(UserProfile {
            name: "Priya Singh".to_string(),
            email: "p@x.com".to_string(),
            username: Some(String::new()),
            bio: Some("  ".to_string()),
        });

        assert_eq!(profile.username.as_deref(), Some("priya_singh"));
        assert!(profile.bio.is_some_and(|bio| bio.contains("Priya Singh")));
    }

    #[test]
    fn test_complete_profile_idempotent() {
        let once = complete_profile(UserProfile {
            name: "Arjun Kumar".to_string(),
            email: "a@x.com".to_string(),
            username: None,
            bio: None,
        });
        let twice = complete_profile(once.clone());
        assert_eq!(once, twice);
    }
}
