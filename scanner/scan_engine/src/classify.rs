//! Character classification.
//!
//! Pure, stateless helpers with no cursor interaction. All checks are plain
//! range comparisons with no locale dependency.

use crate::ScanFlags;

/// Accented letters accepted in names under [`ScanFlags::UMLAUTE`].
pub const UMLAUTE: [char; 7] = ['ä', 'ö', 'ü', 'Ä', 'Ö', 'Ü', 'ß'];

/// Check if `c` is a hexadecimal digit (`0-9`, `a-f`, `A-F`).
#[inline]
pub const fn is_hex_digit(c: char) -> bool {
    hex_digit_value(c).is_some()
}

/// Value of a hexadecimal digit, or `None` if `c` is not one.
#[inline]
pub const fn hex_digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='f' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='F' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Check if `c` may appear in a name under `flags`.
#[inline]
pub fn is_name_char(c: char, flags: ScanFlags) -> bool {
    c.is_ascii_alphabetic()
        || (flags.contains(ScanFlags::DIGITS) && c.is_ascii_digit())
        || (flags.contains(ScanFlags::EXTRA_CHAR) && matches!(c, '_' | '-'))
        || (flags.contains(ScanFlags::UMLAUTE) && UMLAUTE.contains(&c))
}

/// Lowercase `c` for name comparison.
///
/// Only ASCII letters and the upper-case umlauts are folded.
#[inline]
pub const fn fold_case(c: char) -> char {
    match c {
        'Ä' => 'ä',
        'Ö' => 'ö',
        'Ü' => 'ü',
        _ => c.to_ascii_lowercase(),
    }
}

/// Check if `c` is a raw control character (below `0x20`).
#[inline]
pub const fn is_control(c: char) -> bool {
    (c as u32) < 0x20
}

/// Check if `second` completes a CRLF or LFCR pair started by `first`.
#[inline]
pub const fn is_line_pair(first: char, second: char) -> bool {
    matches!((first, second), ('\r', '\n') | ('\n', '\r'))
}
