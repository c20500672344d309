//! The snake_case grammar: lower-case alphanumeric segments joined by
//! single underscores. No leading, trailing, or doubled underscore, and
//! at least one non-underscore character.

use regex::Regex;
use std::sync::LazyLock;

static SNAKE_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").expect("snake_case pattern is valid")
});

/// Pure predicate over a resolved test name. Total and deterministic:
/// never fails, same answer on every call.
pub fn is_valid_snake_case(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    // Case sensitivity is absolute: any upper-case code point anywhere
    // invalidates the name, no locale-aware folding.
    if name.chars().any(char::is_uppercase) {
        return false;
    }

    SNAKE_CASE.is_match(name)
}
