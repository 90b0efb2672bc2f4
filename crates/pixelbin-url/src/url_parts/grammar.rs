//! Version tag and zone slug grammars.

/// Length of a zone slug.
const ZONE_SLUG_LEN: usize = 6;

/// `v` followed by one or more ASCII digits (`v1`, `v2`).
pub fn is_version_tag(s: &str) -> bool {
    match s.strip_prefix('v') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Exactly six characters from `[A-Za-z0-9_-]`.
pub fn is_zone_slug(s: &str) -> bool {
    s.len() == ZONE_SLUG_LEN
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
