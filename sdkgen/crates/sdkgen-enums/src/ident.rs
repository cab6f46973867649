//! Member-name sanitization and disambiguation.
//!
//! Runtime member names arrive scope-qualified (`ENetRole::ROLE_None`) and may
//! contain characters that are not legal in an identifier. The emitted form is
//! the unqualified, sanitized base name plus an optional collision suffix.

use std::borrow::Cow;

/// Drop everything up to and including the last scope separator
///
/// ```
/// use sdkgen_enums::ident::strip_scope;
///
/// assert_eq!(strip_scope("ENetRole::ROLE_None"), "ROLE_None");
/// assert_eq!(strip_scope("Outer::Inner::Value"), "Value");
/// assert_eq!(strip_scope("Plain"), "Plain");
/// ```
pub fn strip_scope(raw: &str) -> &str {
    match raw.rfind(':') {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    }
}

/// Turn `text` into a valid identifier
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `_`
/// prefix and empty text becomes `_`. Valid input is returned unchanged.
///
/// ```
/// use sdkgen_enums::ident::make_valid;
///
/// assert_eq!(make_valid("ROLE_None"), "ROLE_None");
/// assert_eq!(make_valid("Hit Result"), "Hit_Result");
/// assert_eq!(make_valid("3D"), "_3D");
/// assert_eq!(make_valid(""), "_");
/// ```
pub fn make_valid(text: &str) -> Cow<'_, str> {
    let leading_digit = text.starts_with(|c: char| c.is_ascii_digit());
    if !text.is_empty() && !leading_digit && text.chars().all(is_ident_char) {
        return Cow::Borrowed(text);
    }

    let mut valid = String::with_capacity(text.len() + 1);
    if text.is_empty() || leading_digit {
        valid.push('_');
    }
    valid.extend(text.chars().map(|c| if is_ident_char(c) { c } else { '_' }));
    Cow::Owned(valid)
}

/// Emitted form of a base name at a collision ordinal
///
/// Ordinal 0 is the bare name; ordinal `n > 0` appends `_{n - 1}`.
///
/// ```
/// use sdkgen_enums::ident::disambiguate;
///
/// assert_eq!(disambiguate("A", 0), "A");
/// assert_eq!(disambiguate("A", 1), "A_0");
/// assert_eq!(disambiguate("A", 3), "A_2");
/// ```
pub fn disambiguate(base: &str, ordinal: u32) -> Cow<'_, str> {
    match ordinal {
        0 => Cow::Borrowed(base),
        n => Cow::Owned(format!("{}_{}", base, n - 1)),
    }
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scope_trailing_separator() {
        assert_eq!(strip_scope("EBroken::"), "");
        assert_eq!(make_valid(strip_scope("EBroken::")), "_");
    }

    #[test]
    fn test_strip_scope_single_colon() {
        assert_eq!(strip_scope("A:B"), "B");
    }

    #[test]
    fn test_make_valid_borrows_valid_input() {
        assert!(matches!(make_valid("Valid_Name1"), Cow::Borrowed(_)));
        assert!(matches!(make_valid("bad-name"), Cow::Owned(_)));
    }

    #[test]
    fn test_make_valid_non_ascii() {
        assert_eq!(make_valid("Größe"), "Gr__e");
    }

    #[test]
    fn test_make_valid_keeps_reserved_words() {
        assert_eq!(make_valid("TRUE"), "TRUE");
        assert_eq!(make_valid("TRANSPARENT"), "TRANSPARENT");
    }

    #[test]
    fn test_make_valid_leading_digit_and_symbols() {
        assert_eq!(make_valid("1st-place"), "_1st_place");
    }
}
