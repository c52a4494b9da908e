//! Slug normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

static NON_ALPHANUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Failed to compile slug regex"));

/// Base used when a name contains no slug-safe characters at all.
pub const FALLBACK_SLUG: &str = "contact";

/// Length of the random suffix appended to a colliding slug.
pub const SUFFIX_LEN: usize = 6;

/// Turn display text into a lowercase, hyphenated, URL-safe slug.
///
/// Text is NFD-decomposed and combining marks are dropped, so accented
/// letters keep their base letter. Runs of characters outside `[a-z0-9]`
/// then collapse into a single hyphen and leading/trailing hyphens are
/// trimmed. The result may be empty.
///
/// # Example
///
/// ```
/// use curem::domain::slugify;
///
/// assert_eq!(slugify("Sam Flynn"), "sam-flynn");
/// assert_eq!(slugify("sam_flynn"), "sam-flynn");
/// assert_eq!(slugify("  Encom, Inc.  "), "encom-inc");
/// assert_eq!(slugify("José Álvarez"), "jose-alvarez");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Slug base for a person name, never empty.
pub fn base_slug(person: &str) -> String {
    let slug = slugify(person);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Derive an alternative candidate for a taken slug.
pub fn with_random_suffix(base: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}-{}", base, &token[..SUFFIX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Sam Flynn"), "sam-flynn");
        assert_eq!(slugify("Kevin  Flynn"), "kevin-flynn");
        assert_eq!(slugify("sam_flynn"), "sam-flynn");
    }

    #[test]
    fn test_slugify_trims_and_collapses() {
        assert_eq!(slugify("--Dr. Lora Baines!--"), "dr-lora-baines");
        assert_eq!(slugify("Alan 1"), "alan-1");
        assert_eq!(slugify("a___b...c"), "a-b-c");
    }

    #[test]
    fn test_slugify_strips_diacritics() {
        assert_eq!(slugify("José Álvarez"), "jose-alvarez");
        assert_eq!(slugify("Zoë Ñúñez"), "zoe-nunez");
        assert_eq!(slugify("François Müller"), "francois-muller");
    }

    #[test]
    fn test_slugify_drops_other_symbols() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("Sam ✓ Flynn"), "sam-flynn");
    }

    #[test]
    fn test_base_slug_falls_back() {
        assert_eq!(base_slug("Flynn"), "flynn");
        assert_eq!(base_slug("???"), FALLBACK_SLUG);
    }

    #[test]
    fn test_random_suffix_shape() {
        let candidate = with_random_suffix("sam-flynn");
        let suffix = candidate.strip_prefix("sam-flynn-").unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(slugify(&candidate), candidate);
    }
}
