// src/domain/validation.rs
//
// Field-shape validators shared by the entity factories. These mirror the
// schema-level rules of the stored records: they check shape only, never
// calendar validity or referential integrity.
use regex::Regex;
use std::sync::LazyLock;

static ARTICLE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("article id pattern"));

static DATE_FORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Article ids are human-assigned and restricted to ASCII letters and digits.
pub fn is_valid_article_id(value: &str) -> bool {
    ARTICLE_ID_RE.is_match(value)
}

/// Checks the `yyyy-mm-dd` shape only. `2024-13-99` passes here; calendar
/// validity is the normalization step's concern.
pub fn is_valid_date_format(value: &str) -> bool {
    DATE_FORMAT_RE.is_match(value)
}

/// Lexicographic comparison, equivalent to date order because the format is
/// fixed-width and zero-padded.
pub fn is_not_future(value: &str, today: &str) -> bool {
    value <= today
}

pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_non_negative(value: i64) -> bool {
    value >= 0
}
