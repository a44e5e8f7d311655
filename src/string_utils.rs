//! Character-Offset String Utilities
//!
//! Selections in this crate are measured in characters, the way text widgets
//! report caret positions, while Rust strings are sliced by UTF-8 byte index.
//! These helpers convert between the two so that multi-byte text such as
//! `ø`, `中` or `🎉` never causes a slice on a non-boundary.
//!
//! # Example
//! ```ignore
//! use crate::string_utils::{char_to_byte, char_len};
//!
//! let text = "Hei på deg";
//! assert_eq!(char_len(text), 10);
//! assert_eq!(&text[char_to_byte(text, 4)..], "på deg");
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Offset Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Number of characters in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the character at `char_idx`.
///
/// Indices at or past the end map to `s.len()`.
pub fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Character index of the character starting at byte `byte_idx`.
///
/// `byte_idx` must lie on a character boundary.
pub fn byte_to_char(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx].chars().count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Whitespace Inspection
// ─────────────────────────────────────────────────────────────────────────────

/// Count the literal space characters at the start of `line`.
///
/// Tabs and other whitespace stop the count.
#[inline]
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_ascii_and_multibyte() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("hello"), 5);
        assert_eq!(char_len("Hei på deg"), 10);
        assert_eq!(char_len("中文🎉"), 3);
    }

    #[test]
    fn test_char_to_byte_norwegian() {
        let text = "Hei på deg";
        assert_eq!(char_to_byte(text, 0), 0);
        assert_eq!(char_to_byte(text, 5), 5); // 'å' starts at byte 5
        assert_eq!(char_to_byte(text, 6), 7); // ' ' after the 2-byte 'å'
        assert_eq!(char_to_byte(text, 10), text.len());
    }

    #[test]
    fn test_char_to_byte_past_end_clamps() {
        assert_eq!(char_to_byte("abc", 99), 3);
        assert_eq!(char_to_byte("", 1), 0);
    }

    #[test]
    fn test_byte_to_char_emoji() {
        let text = "a🎉b";
        assert_eq!(byte_to_char(text, 0), 0);
        assert_eq!(byte_to_char(text, 1), 1);
        assert_eq!(byte_to_char(text, 5), 2);
    }

    #[test]
    fn test_leading_spaces() {
        assert_eq!(leading_spaces("* item"), 0);
        assert_eq!(leading_spaces("  * item"), 2);
        assert_eq!(leading_spaces("      x"), 6);
        assert_eq!(leading_spaces("\t  x"), 0);
        assert_eq!(leading_spaces("   "), 3);
    }
}
