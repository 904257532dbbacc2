//! Article slugs
//!
//! A slug is the lower-cased title with anything outside `[a-z0-9 -]`
//! dropped and whitespace runs turned into `-`, followed by a short random
//! hex suffix so that equal titles still get distinct slugs.

use uuid::Uuid;

/// Hex characters appended to every slug
pub const SUFFIX_LEN: usize = 6;

/// Slugify a title without the random suffix
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || c.is_whitespace())
        .collect();

    cleaned
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Slug for a new or retitled article
pub fn new_slug(title: &str) -> String {
    let suffix = random_suffix();
    let base = slugify(title);
    if base.is_empty() {
        suffix
    } else {
        format!("{}-{}", base, suffix)
    }
}

fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..SUFFIX_LEN].to_string()
}
