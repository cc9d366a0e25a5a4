//! Field format predicates.
//!
//! All checks are anchored, whole-string matches. They are syntactic only:
//! a date such as `31-02-2023` is well-formed even though it does not exist.

use std::sync::LazyLock;

use regex::Regex;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[a-z]+$")
    .unwrap_or_else(|e| panic!("name regex failed to compile: {e}"))
});

// `[0-9]` rather than `\d`: the latter matches any Unicode digit.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-[0-9]{4}$")
    .unwrap_or_else(|e| panic!("date regex failed to compile: {e}"))
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$")
    .unwrap_or_else(|e| panic!("time regex failed to compile: {e}"))
});

/// One or more lowercase ASCII letters.
pub fn is_name(s: &str) -> bool { NAME_RE.is_match(s) }

/// `DD-MM-YYYY`, `DD` in 01–31 and `MM` in 01–12.
pub fn is_date(s: &str) -> bool { DATE_RE.is_match(s) }

/// 24-hour `HH:MM`.
pub fn is_time(s: &str) -> bool { TIME_RE.is_match(s) }
