//! Input masks and normalization applied before a member is stored.

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Brazilian phone mask.
///
/// Progressive like the form input: `(11`, `(11) 9876`, `(11) 9876-5432`,
/// and `(11) 98765-4321` once there are 11 digits. Extra digits are dropped.
pub fn format_phone(value: &str) -> String {
    let digits = digits_only(value);
    let n = digits.len();
    if n == 0 {
        return String::new();
    }
    if n <= 2 {
        return format!("({}", digits);
    }
    if n <= 6 {
        return format!("({}) {}", &digits[..2], &digits[2..]);
    }
    if n <= 10 {
        return format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]);
    }
    format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11])
}

/// CEP mask `NNNNN-NNN`. Digits beyond the eighth are dropped.
pub fn format_cep(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() > 5 {
        let end = digits.len().min(8);
        return format!("{}-{}", &digits[..5], &digits[5..end]);
    }
    digits
}

/// Logins are compared case-insensitively and stored trimmed + upper-case.
pub fn normalize_login(login: &str) -> String {
    login.trim().to_uppercase()
}

/// Blank strings become `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// File-name slug: lower-case, anything outside `[a-z0-9]` becomes `_`.
pub fn file_slug(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect()
}
