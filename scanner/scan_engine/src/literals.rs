//! Literal readers: integers, floats, strings, words and lines.
//!
//! Every reader follows the same shape:
//! 1. skip leading whitespace when `SKIP_SPACE` is set
//! 2. mark the token start
//! 3. consume a maximal run of permissible characters
//! 4. convert, reporting failures with the accumulated token text
//!
//! On success the token window covers exactly the literal, and trailing
//! whitespace is skipped when `SKIP_SPACE` is set.
//!
//! # Control Characters
//!
//! Strings and lines fold every raw control character (below `0x20`) to a
//! single `\n`. A CR or LF swallows one directly following partner, so CRLF
//! and LFCR both become one `\n`.

use tracing::trace;

use crate::classify::{hex_digit_value, is_control, is_hex_digit, is_line_pair};
use crate::{Result, ScanErrorKind, ScanFlags, Scanner};

/// Fractional digits beyond this count are consumed but do not contribute.
const MAX_FRACTION_DIGITS: i32 = 19;

/// Which integer syntax a digit run is read with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntSyntax {
    /// Decimal, or hex when the flags allow it.
    Number,
    /// ASCII digits only.
    Decimal,
}

impl IntSyntax {
    fn error_kind(self) -> ScanErrorKind {
        match self {
            IntSyntax::Number => ScanErrorKind::NumberExpected,
            IntSyntax::Decimal => ScanErrorKind::DecimalNumberExpected,
        }
    }
}

/// Parse a digit run in `radix` with overflow checking.
#[inline]
fn parse_magnitude(digits: &str, radix: u32) -> Option<u64> {
    let mut result: u64 = 0;
    for c in digits.chars() {
        let digit = hex_digit_value(c).filter(|&d| d < radix)?;
        result = result.checked_mul(u64::from(radix))?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

impl Scanner {
    // === Integers ===

    /// Read an unsigned integer.
    ///
    /// Decimal by default. With `HEX`, hex letters and a `0x` prefix are
    /// accepted and switch the literal to base 16; with `HEX_ONLY` the whole
    /// literal is hex and no prefix is recognized. A non-zero `max_value`
    /// bounds the result.
    pub fn get_unsigned_number(&mut self, flags: ScanFlags, max_value: u64) -> Result<u64> {
        self.read_unsigned(flags, max_value, IntSyntax::Number)
    }

    /// Read an integer with an optional leading `-`.
    ///
    /// `max_value` bounds the magnitude.
    pub fn get_signed_number(&mut self, flags: ScanFlags, max_value: u64) -> Result<i64> {
        self.read_signed(flags, max_value, IntSyntax::Number)
    }

    /// Read an unsigned integer made of ASCII digits only.
    pub fn get_unsigned_decimal(&mut self, flags: ScanFlags, max_value: u64) -> Result<u64> {
        self.read_unsigned(flags, max_value, IntSyntax::Decimal)
    }

    /// Read a decimal integer with an optional leading `-`.
    pub fn get_signed_decimal(&mut self, flags: ScanFlags, max_value: u64) -> Result<i64> {
        self.read_signed(flags, max_value, IntSyntax::Decimal)
    }

    fn read_unsigned(&mut self, flags: ScanFlags, max_value: u64, syntax: IntSyntax) -> Result<u64> {
        let flags = flags.normalized().difference(ScanFlags::SIGNED);
        self.skip_leading(flags);
        self.mark_token_start();
        let value = self.scan_magnitude(flags, max_value, syntax)?;
        self.finish_literal(flags);
        trace!(value, "unsigned literal");
        Ok(value)
    }

    fn read_signed(&mut self, flags: ScanFlags, max_value: u64, syntax: IntSyntax) -> Result<i64> {
        let flags = flags.normalized().union(ScanFlags::SIGNED);
        self.skip_leading(flags);
        self.mark_token_start();
        let negative = flags.contains(ScanFlags::SIGNED) && self.match_char('-', false);
        let magnitude = self.scan_magnitude(flags, max_value, syntax)?;
        let value = if negative {
            0_i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        };
        let Some(value) = value else {
            let limit = if negative {
                i64::MIN.unsigned_abs()
            } else {
                i64::MAX.unsigned_abs()
            };
            return Err(self.token_error(
                ScanFlags::TO_LOCATION,
                ScanErrorKind::Overflow { max: limit },
            ));
        };
        self.finish_literal(flags);
        trace!(value, "signed literal");
        Ok(value)
    }

    /// Consume a digit run at the cursor and convert it.
    ///
    /// The token start must already be marked; it may sit before a sign.
    fn scan_magnitude(&mut self, flags: ScanFlags, max_value: u64, syntax: IntSyntax) -> Result<u64> {
        let kind = syntax.error_kind();
        let hex = syntax == IntSyntax::Number && flags.contains(ScanFlags::HEX);
        let prefix_allowed = hex && !flags.contains(ScanFlags::HEX_ONLY);
        let mut radix = if hex && flags.contains(ScanFlags::HEX_ONLY) { 16 } else { 10 };
        let mut prefixed = false;
        let mut digits = String::new();

        while let Some(c) = self.current() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if hex && is_hex_digit(c) {
                digits.push(c);
                radix = 16;
            } else if prefix_allowed && matches!(c, 'x' | 'X') {
                self.advance();
                if prefixed || digits != "0" {
                    return Err(self.token_error(ScanFlags::TO_LOCATION, kind));
                }
                prefixed = true;
                radix = 16;
                digits.clear();
                continue;
            } else {
                break;
            }
            self.advance();
        }

        if digits.is_empty() {
            let end_mode = if prefixed { ScanFlags::TO_LOCATION } else { ScanFlags::TO_SPACE };
            return Err(self.token_error(end_mode, kind));
        }
        let Some(value) = parse_magnitude(&digits, radix) else {
            return Err(self.token_error(ScanFlags::TO_LOCATION, kind));
        };
        if max_value > 0 && value > max_value {
            return Err(self.token_error(
                ScanFlags::TO_LOCATION,
                ScanErrorKind::Overflow { max: max_value },
            ));
        }
        Ok(value)
    }

    // === Floats ===

    /// Read a floating point number: optional sign, integer part, and an
    /// optional fraction after `.` (or `,` with `COMMA`).
    #[allow(
        clippy::cast_precision_loss,
        reason = "fraction digits are capped at MAX_FRACTION_DIGITS, within f64 range"
    )]
    pub fn get_float(&mut self, flags: ScanFlags) -> Result<f64> {
        let flags = flags.normalized();
        self.skip_leading(flags);
        self.mark_token_start();
        let negative = self.match_one_of("+-", false) == Some(2);

        let integer = self.scan_float_digits(|value: f64, digit| value * 10.0 + f64::from(digit));
        let Some(mut value) = integer else {
            return Err(self.token_error(ScanFlags::TO_SPACE, ScanErrorKind::FloatNumberExpected));
        };

        let separator = self.match_char('.', false)
            || (flags.contains(ScanFlags::COMMA) && self.match_char(',', false));
        if separator {
            let mut count = 0_i32;
            let fraction = self.scan_float_digits(|fraction: u64, digit| {
                if count >= MAX_FRACTION_DIGITS {
                    return fraction;
                }
                count += 1;
                fraction * 10 + u64::from(digit)
            });
            let Some(fraction) = fraction else {
                return Err(
                    self.token_error(ScanFlags::TO_LOCATION, ScanErrorKind::FloatNumberExpected)
                );
            };
            value += fraction as f64 / 10_f64.powi(count);
        }

        if negative {
            value = -value;
        }
        self.finish_literal(flags);
        trace!(value, "float literal");
        Ok(value)
    }

    /// Fold a run of ASCII digits into an accumulator. `None` if the run is empty.
    fn scan_float_digits<T: Default>(&mut self, mut fold: impl FnMut(T, u32) -> T) -> Option<T> {
        let mut acc = T::default();
        let mut any = false;
        while let Some(digit) = self.current().and_then(|c| c.to_digit(10)) {
            acc = fold(acc, digit);
            any = true;
            self.advance();
        }
        any.then_some(acc)
    }

    // === Strings ===

    /// Read a string literal.
    ///
    /// A string starting with `"` runs to the next `"` not followed by
    /// another `"`; a doubled `""` stands for one literal quote. Otherwise the
    /// string runs to the next whitespace. With `QUOTED` the quotes are
    /// required.
    pub fn get_string(&mut self, flags: ScanFlags) -> Result<String> {
        let flags = flags.normalized();
        self.skip_leading(flags);
        self.mark_token_start();
        let quoted = self.current() == Some('"');
        if !quoted && flags.contains(ScanFlags::QUOTED) {
            return Err(self.token_error(ScanFlags::TO_SPACE, ScanErrorKind::StringExpected));
        }
        let text = if quoted {
            self.scan_quoted()?
        } else {
            self.scan_unquoted()
        };
        self.finish_literal(flags);
        trace!(len = text.len(), quoted, "string literal");
        Ok(text)
    }

    fn scan_quoted(&mut self) -> Result<String> {
        self.advance();
        let mut text = String::new();
        loop {
            let Some(c) = self.current() else {
                return Err(self.token_error(ScanFlags::TO_END, ScanErrorKind::StringEndExpected));
            };
            self.advance();
            match c {
                '"' if self.current() == Some('"') => {
                    text.push('"');
                    self.advance();
                }
                '"' => return Ok(text),
                c => self.push_folded(&mut text, c),
            }
        }
    }

    fn scan_unquoted(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.current() {
            if self.is_space(c) {
                break;
            }
            self.advance();
            self.push_folded(&mut text, c);
        }
        text
    }

    /// Append an already consumed `c`, folding control characters.
    fn push_folded(&mut self, text: &mut String, c: char) {
        if !is_control(c) {
            text.push(c);
            return;
        }
        text.push('\n');
        if self.current().is_some_and(|next| is_line_pair(c, next)) {
            self.advance();
        }
    }

    // === Words and Lines ===

    /// Read the next whitespace-delimited word. Empty at end of input.
    pub fn get_next_token(&mut self, skip_space: bool) -> String {
        let flags = ScanFlags::from_skip(skip_space);
        self.skip_leading(flags);
        self.mark_token_start();
        while let Some(c) = self.current() {
            if self.is_space(c) {
                break;
            }
            self.advance();
        }
        self.finish_literal(flags);
        let range = self.token_range();
        self.text()[range].to_owned()
    }

    /// Read the rest of the current line and step past its terminator.
    ///
    /// The line ends at CR or LF; a CRLF or LFCR pair counts as one
    /// terminator. Fails only when skipping leading whitespace ran into the
    /// end of input.
    pub fn get_next_line(&mut self, skip_space: bool) -> Result<String> {
        let before = self.position();
        if skip_space {
            self.skip_whitespace();
        }
        self.mark_token_start();
        if self.position() > before && self.current().is_none() {
            return Err(self.token_error(
                ScanFlags::TO_END,
                ScanErrorKind::SpecNotFound {
                    expected: "line".to_owned(),
                },
            ));
        }

        let rest = self.remaining().unwrap_or_default().as_bytes();
        let end = self.position() + memchr::memchr2(b'\r', b'\n', rest).unwrap_or(rest.len());
        let mut line = String::with_capacity(end - self.position());
        while self.position() < end {
            let Some(c) = self.current() else { break };
            self.advance();
            self.push_folded(&mut line, c);
        }
        self.resolve_token_end(ScanFlags::TO_LOCATION);

        if let Some(c @ ('\r' | '\n')) = self.current() {
            self.advance();
            if self.current().is_some_and(|next| is_line_pair(c, next)) {
                self.advance();
            }
        }
        trace!(len = line.len(), "line read");
        Ok(line)
    }

    // === Shared Steps ===

    #[inline]
    fn skip_leading(&mut self, flags: ScanFlags) {
        if flags.skip_space() {
            self.skip_whitespace();
        }
    }

    /// Close the token window at the cursor and skip trailing whitespace.
    #[inline]
    fn finish_literal(&mut self, flags: ScanFlags) {
        self.resolve_token_end(ScanFlags::TO_LOCATION);
        if flags.skip_space() {
            self.skip_whitespace();
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
