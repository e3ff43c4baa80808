//! Token window: where the last token starts and ends.
//!
//! The window is tracked independently of the cursor. A caller marks the
//! start, keeps scanning, and only later decides how the token is bounded:
//! at the cursor, at the next whitespace, or at the end of the text. Error
//! paths use this to report the offending token without rescanning.
//!
//! `token_end == None` means the end has not been resolved since the last
//! [`mark_token_start`](Scanner::mark_token_start).

use std::ops::Range;

use tracing::{debug, trace};

use crate::{Result, ScanError, ScanErrorKind, ScanFlags, Scanner};

impl Scanner {
    /// Start the token window at the cursor.
    pub fn mark_token_start(&mut self) {
        self.token_start = self.position();
        self.token_end = None;
    }

    /// Start the token window at `pos`, resolving its end right away when
    /// `end_mode` carries a token-end flag.
    ///
    /// `pos` must be a character offset strictly inside the text.
    pub fn mark_token_start_at(&mut self, pos: usize, end_mode: ScanFlags) -> Result<()> {
        if pos >= self.len() || !self.text().is_char_boundary(pos) {
            return Err(ScanError::argument_out_of_range(pos));
        }
        self.token_start = pos;
        self.token_end = None;
        if !end_mode.token_end().is_empty() {
            self.resolve_token_end(end_mode);
        }
        Ok(())
    }

    /// Compute the end of the token window from its start.
    ///
    /// - no end flag or `TO_END`: the rest of the text
    /// - `TO_LOCATION`: the cursor
    /// - `TO_SPACE`: the next whitespace or end of text; combined with
    ///   `TO_LOCATION` the nearer of the two wins
    pub fn resolve_token_end(&mut self, end_mode: ScanFlags) {
        let start = self.token_start;
        let len = self.len();
        let end = if start >= len {
            start
        } else if end_mode.contains(ScanFlags::TO_SPACE) {
            let space = self.text()[start..]
                .char_indices()
                .find(|&(_, c)| self.is_space(c))
                .map_or(len, |(offset, _)| start + offset);
            if end_mode.contains(ScanFlags::TO_LOCATION) {
                space.min(self.location_end())
            } else {
                space
            }
        } else if end_mode.contains(ScanFlags::TO_LOCATION) {
            self.location_end()
        } else {
            len
        };
        self.token_end = Some(end);
        trace!(start, end, ?end_mode, "resolved token end");
    }

    /// The cursor as a token end, never before the token start.
    fn location_end(&self) -> usize {
        debug_assert!(
            self.position() >= self.token_start,
            "cursor {} is before token start {}",
            self.position(),
            self.token_start
        );
        self.position().max(self.token_start)
    }

    /// Text of the last token.
    ///
    /// With a token-end flag in `end_mode` the end is recomputed; otherwise an
    /// unresolved end defaults to the next whitespace.
    pub fn get_last_token(&mut self, end_mode: ScanFlags) -> &str {
        let range = self.resolved_range(end_mode);
        &self.text()[range]
    }

    /// Byte range of the last token, resolving its end like
    /// [`get_last_token`](Self::get_last_token) with no flags.
    pub fn token_range(&mut self) -> Range<usize> {
        self.resolved_range(ScanFlags::empty())
    }

    fn resolved_range(&mut self, end_mode: ScanFlags) -> Range<usize> {
        if !end_mode.token_end().is_empty() {
            self.resolve_token_end(end_mode);
        }
        let end = match self.token_end {
            Some(end) => end,
            None => {
                self.resolve_token_end(ScanFlags::TO_SPACE);
                self.token_end.unwrap_or(self.token_start)
            }
        };
        self.token_start..end
    }

    /// Resolve the window with `end_mode` and build an error carrying it.
    #[cold]
    pub(crate) fn token_error(&mut self, end_mode: ScanFlags, kind: ScanErrorKind) -> ScanError {
        let range = self.resolved_range(end_mode);
        let err = ScanError::new(kind, &self.text()[range.clone()], range.start);
        debug!(kind = %err.kind, token = %err.token, pos = err.pos, "scan error");
        err
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
