use std::sync::LazyLock;

use regex::Regex;

static CHINESE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[一-龥]+$").expect("CJK pattern is valid"));

/// Lowercase hex MD5 of the UTF-8 bytes, 32 characters.
pub fn md5_hex(value: &str) -> String {
    format!("{:x}", md5::compute(value.as_bytes()))
}

pub fn is_http_url(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.starts_with("http://") || v.starts_with("https://"))
}

/// True for a non-empty string made only of common CJK ideographs.
pub fn is_chinese(value: &str) -> bool {
    CHINESE.is_match(value)
}

/// The first character, or `""` for a missing or empty string.
pub fn first_element(value: Option<&str>) -> &str {
    value
        .and_then(|v| v.chars().next().map(|c| &v[..c.len_utf8()]))
        .unwrap_or("")
}
