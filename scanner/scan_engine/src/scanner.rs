//! Cursor over a resident text buffer.
//!
//! The scanner owns the text, the scan position and the whitespace set.
//! Positions are byte offsets into the UTF-8 text and always lie on a
//! character boundary: every advance moves past one whole character, and
//! every caller-supplied position is checked before it is accepted.
//!
//! # Position Invariant
//!
//! `0 <= pos <= text.len()`. A position equal to `text.len()` means the
//! cursor is at end of input; reading operations fail with
//! [`ScanErrorKind::OutOfRange`](crate::ScanErrorKind::OutOfRange) there.

use tracing::trace;

use crate::{Result, ScanError, ScanErrorKind, ScanFlags, ScannerConfig};

/// Stateful text scanner.
///
/// Owned and driven by exactly one caller. The scanner performs no internal
/// synchronization; wrap it in a lock to share it across threads.
#[derive(Clone, Debug)]
pub struct Scanner {
    /// Full input. Replaced wholesale by [`init`](Self::init).
    text: String,
    /// Current read position (byte offset into `text`).
    pos: usize,
    /// Whitespace set and other settings.
    config: ScannerConfig,
    /// Start of the last token.
    pub(crate) token_start: usize,
    /// End of the last token, `None` until resolved.
    pub(crate) token_end: Option<usize>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Scanner {
    /// Create a scanner at position 0 over `text` with the default config.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, ScannerConfig::default())
    }

    /// Create a scanner at position 0 over `text`.
    pub fn with_config(text: impl Into<String>, config: ScannerConfig) -> Self {
        Self {
            text: text.into(),
            pos: 0,
            config,
            token_start: 0,
            token_end: Some(0),
        }
    }

    /// Replace the text and reset the cursor and token window to 0.
    pub fn init(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.pos = 0;
        self.token_start = 0;
        self.token_end = Some(0);
        trace!(len = self.text.len(), "scanner initialized");
    }

    // === Accessors ===

    /// The full text being scanned.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if no text is loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread suffix, or `None` at end of input.
    pub fn remaining(&self) -> Option<&str> {
        if self.pos < self.text.len() {
            Some(&self.text[self.pos..])
        } else {
            None
        }
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Characters currently treated as whitespace.
    #[inline]
    pub fn whitespace(&self) -> &str {
        &self.config.whitespace
    }

    /// Replace the whitespace set.
    ///
    /// An empty set is accepted and disables all whitespace skipping.
    pub fn set_whitespace(&mut self, whitespace: Option<&str>) -> Result<()> {
        let whitespace = whitespace.ok_or_else(|| ScanError::argument_null("whitespace"))?;
        whitespace.clone_into(&mut self.config.whitespace);
        Ok(())
    }

    // === Positioning ===

    /// Move the cursor to `pos` and start a fresh, empty token window there.
    pub fn set_position(&mut self, pos: usize) -> Result<()> {
        if !self.is_valid_position(pos) {
            return Err(ScanError::out_of_range(pos));
        }
        self.pos = pos;
        self.token_start = pos;
        self.token_end = Some(pos);
        trace!(pos, "set position");
        Ok(())
    }

    /// Move the cursor by `delta` bytes. The token window is not touched.
    pub fn move_position(&mut self, delta: isize) -> Result<()> {
        let target = self
            .pos
            .checked_add_signed(delta)
            .filter(|&target| self.is_valid_position(target))
            .ok_or_else(|| ScanError::out_of_range(self.pos))?;
        self.pos = target;
        trace!(delta, pos = self.pos, "move position");
        Ok(())
    }

    /// Check that `pos` is within `[0, len]` and on a character boundary.
    #[inline]
    pub(crate) fn is_valid_position(&self, pos: usize) -> bool {
        pos <= self.text.len() && self.text.is_char_boundary(pos)
    }

    /// Roll the cursor back to a position it held earlier.
    #[inline]
    pub(crate) fn restore(&mut self, pos: usize) {
        debug_assert!(self.is_valid_position(pos), "restore to invalid position {pos}");
        self.pos = pos;
    }

    // === Character Access ===

    /// The character at the cursor, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    /// The character starting at byte offset `idx`, if any.
    #[inline]
    pub(crate) fn char_at(&self, idx: usize) -> Option<char> {
        self.text.get(idx..).and_then(|rest| rest.chars().next())
    }

    /// Advance past the character at the cursor. No-op at end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Check if `c` is in the whitespace set.
    #[inline]
    pub(crate) fn is_space(&self, c: char) -> bool {
        self.config.is_whitespace(c)
    }

    // === Primitive Operations ===

    /// Advance past every whitespace character at the cursor.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !self.is_space(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace, failing if there is none at the cursor.
    pub fn skip_whitespace_required(&mut self) -> Result<()> {
        if !matches!(self.current(), Some(c) if self.is_space(c)) {
            self.mark_token_start();
            return Err(self.token_error(
                ScanFlags::TO_SPACE,
                ScanErrorKind::SpecNotFound {
                    expected: "whitespace".to_owned(),
                },
            ));
        }
        self.skip_whitespace();
        Ok(())
    }

    /// Check if the character at the cursor is whitespace.
    pub fn is_whitespace_here(&self) -> Result<bool> {
        self.current()
            .map(|c| self.is_space(c))
            .ok_or_else(|| ScanError::out_of_range(self.pos))
    }

    /// The character at the cursor, without consuming it.
    pub fn peek_char(&mut self, skip_space: bool) -> Result<char> {
        if skip_space {
            self.skip_whitespace();
        }
        self.current().ok_or_else(|| ScanError::out_of_range(self.pos))
    }

    /// Advance one character, optionally skip whitespace, and return the
    /// character now at the cursor.
    pub fn next_char(&mut self, skip_space: bool) -> Result<char> {
        self.advance();
        self.peek_char(skip_space)
    }

    /// Like [`next_char`](Self::next_char), but the cursor is left where it was.
    pub fn look_ahead_char(&mut self, skip_space: bool) -> Result<char> {
        let saved = self.pos;
        let result = self.next_char(skip_space);
        self.restore(saved);
        result
    }

    /// Check if the cursor is at end of input.
    pub fn is_end_of_input(&mut self, skip_space: bool) -> bool {
        if skip_space {
            self.skip_whitespace();
        }
        self.pos >= self.text.len()
    }

    /// Fail with [`ScanErrorKind::EndExpected`] unless the input is exhausted.
    ///
    /// The error's token is the trailing text up to the next whitespace.
    pub fn assert_end_of_input(&mut self, skip_space: bool) -> Result<()> {
        if self.is_end_of_input(skip_space) {
            return Ok(());
        }
        self.mark_token_start();
        Err(self.token_error(ScanFlags::TO_SPACE, ScanErrorKind::EndExpected))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
