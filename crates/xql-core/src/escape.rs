//! Identifier and string escaping.
//!
//! An identifier is left bare when it is made only of letters (general
//! category `L*`, any script), ASCII digits, `$` and `_`, and is not purely numeric. Anything else is
//! wrapped in the quote character with embedded quotes doubled.

use std::borrow::Cow;

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Returns true if `c` may appear in a bare identifier.
///
/// Marks (`M*`) and letter numbers (`Nl`) are not letters here, even though
/// `char::is_alphabetic` accepts them.
fn is_bare_char(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
        || c.is_ascii_digit()
        || c == '$'
        || c == '_'
}

/// Returns true if `name` must be quoted to be read back as an identifier.
#[must_use]
pub fn needs_quoting(name: &str) -> bool {
    let mut digits = 0;
    let mut chars = 0;

    for c in name.chars() {
        if !is_bare_char(c) {
            return true;
        }
        if c.is_ascii_digit() {
            digits += 1;
        }
        chars += 1;
    }

    // purely numeric names, including the empty name
    digits == chars
}

/// Escapes an identifier with the given quote character.
///
/// ```
/// use xql_core::escape_identifier;
///
/// assert_eq!(escape_identifier("products", '`'), "products");
/// assert_eq!(escape_identifier("4foobar2", '`'), "4foobar2");
/// assert_eq!(escape_identifier("42", '`'), "`42`");
/// assert_eq!(escape_identifier("foo`bar", '`'), "`foo``bar`");
/// ```
#[must_use]
pub fn escape_identifier(name: &str, quote: char) -> Cow<'_, str> {
    if !needs_quoting(name) {
        return Cow::Borrowed(name);
    }

    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for c in name.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
    out.push(quote);
    Cow::Owned(out)
}

/// Reverses [`escape_identifier`].
///
/// Returns `None` if `escaped` is neither a bare identifier nor a well-formed
/// quoted one.
#[must_use]
pub fn unescape_identifier(escaped: &str, quote: char) -> Option<Cow<'_, str>> {
    let Some(inner) = escaped
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
    else {
        return (!needs_quoting(escaped)).then_some(Cow::Borrowed(escaped));
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == quote && chars.next() != Some(quote) {
            return None;
        }
        out.push(c);
    }
    Some(Cow::Owned(out))
}

/// Quotes a string literal with single quotes, doubling embedded ones.
#[must_use]
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_identifiers() {
        for name in ["foobar", "foo_bar", "$foobar", "4foobar2", "测试", "a1"] {
            assert_eq!(escape_identifier(name, '`'), name);
            assert!(matches!(escape_identifier(name, '`'), Cow::Borrowed(_)));
        }
    }

    #[test]
    fn test_quoted_identifiers() {
        assert_eq!(escape_identifier("foo bar", '`'), "`foo bar`");
        assert_eq!(escape_identifier("foo+bar", '`'), "`foo+bar`");
        assert_eq!(escape_identifier("foo'bar", '`'), "`foo'bar`");
        assert_eq!(escape_identifier("foo`bar", '`'), "`foo``bar`");
        assert_eq!(escape_identifier("foo\"bar", '"'), "\"foo\"\"bar\"");
        // a spacing mark and a letter number are alphabetic but not letters
        assert_eq!(escape_identifier("\u{939}\u{93F}", '`'), "`\u{939}\u{93F}`");
        assert_eq!(escape_identifier("\u{216B}", '`'), "`\u{216B}`");
    }

    #[test]
    fn test_every_quote_is_doubled() {
        assert_eq!(escape_identifier("a`b`c", '`'), "`a``b``c`");
        assert_eq!(escape_identifier("a b`c", '`'), "`a b``c`");
        assert_eq!(escape_identifier("`", '`'), "````");
    }

    #[test]
    fn test_numeric_names_are_quoted() {
        assert_eq!(escape_identifier("42", '`'), "`42`");
        assert_eq!(escape_identifier("0", '"'), "\"0\"");
        assert_eq!(escape_identifier("", '`'), "``");
    }

    #[test]
    fn test_non_ascii_digits_do_not_count_as_digits() {
        // Arabic-Indic digits are not ASCII digits nor letters
        assert_eq!(escape_identifier("٤٢", '`'), "`٤٢`");
    }

    #[test]
    fn test_escape_is_stable_after_unwrapping() {
        for name in ["products", "42", "foo`bar", "foo bar", "", "a``b"] {
            let once = escape_identifier(name, '`').into_owned();
            let back = unescape_identifier(&once, '`').map(Cow::into_owned);
            assert_eq!(back.as_deref(), Some(name), "round trip of {name:?}");
            assert_eq!(escape_identifier(&back.unwrap_or_default(), '`'), once);
        }
    }

    #[test]
    fn test_unescape_rejects_malformed() {
        assert_eq!(unescape_identifier("`a`b`", '`'), None);
        assert_eq!(unescape_identifier("foo bar", '`'), None);
    }

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("Cheese"), "'Cheese'");
        assert_eq!(quote_string("O'Reilly"), "'O''Reilly'");
        assert_eq!(quote_string(""), "''");
    }
}
