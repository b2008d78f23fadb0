//! Character classes of the N-Quads grammar and the literal escaping transform.

use std::fmt;

/// Matches the `PN_CHARS_BASE` production.
pub(crate) fn is_pn_chars_base(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | 'a'..='z'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{02FF}'
        | '\u{0370}'..='\u{037D}'
        | '\u{037F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// Matches the `PN_CHARS_U` production, `:` included.
pub(crate) fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_' || c == ':'
}

/// Matches the `PN_CHARS` production.
pub(crate) fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || c.is_ascii_digit()
        || matches!(c, '-' | '\u{00B7}' | '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// Matches the inline whitespace characters (tab and space).
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | ' ')
}

/// Matches the end of line characters (line feed and carriage return).
pub(crate) fn is_eol(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Writes a literal lexical value with N-Quads escaping applied.
///
/// The short escape forms are used where they exist, the remaining control
/// characters are written as `\uXXXX` with lowercase hexadecimal digits and
/// everything else passes through unchanged.
pub(crate) fn write_escaped(string: &str, f: &mut impl fmt::Write) -> fmt::Result {
    for c in string.chars() {
        match c {
            '\u{08}' => f.write_str("\\b"),
            '\t' => f.write_str("\\t"),
            '\n' => f.write_str("\\n"),
            '\u{0C}' => f.write_str("\\f"),
            '\r' => f.write_str("\\r"),
            '"' => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            '\0'..='\u{1F}' | '\u{7F}' => write!(f, "\\u{:04x}", u32::from(c)),
            _ => f.write_char(c),
        }?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(input: &str) -> String {
        let mut out = String::new();
        write_escaped(input, &mut out).unwrap();
        out
    }

    #[test]
    fn escape_short_forms() {
        assert_eq!(escaped("a\tb\nc\rd"), "a\\tb\\nc\\rd");
        assert_eq!(escaped("\u{8}\u{C}"), "\\b\\f");
        assert_eq!(escaped("say \"hi\\\""), "say \\\"hi\\\\\\\"");
    }

    #[test]
    fn escape_control_characters_lowercase() {
        assert_eq!(escaped("\u{0}\u{1B}\u{7F}"), "\\u0000\\u001b\\u007f");
    }

    #[test]
    fn escape_passes_other_characters_through() {
        assert_eq!(escaped("p\u{159}\u{ed}li\u{161} \u{10348}"), "p\u{159}\u{ed}li\u{161} \u{10348}");
    }

    #[test]
    fn pn_chars_membership() {
        assert!(is_pn_chars_u(':'));
        assert!(is_pn_chars_u('_'));
        assert!(!is_pn_chars_u('0'));
        assert!(is_pn_chars('0'));
        assert!(is_pn_chars('-'));
        assert!(is_pn_chars('\u{00B7}'));
        assert!(!is_pn_chars('.'));
        assert!(!is_pn_chars(' '));
        assert!(is_pn_chars_base('\u{10000}'));
        assert!(!is_pn_chars_base('\u{F0000}'));
    }
}
