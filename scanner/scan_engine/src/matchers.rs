//! Fixed-token and keyword matching.
//!
//! Fixed-token matchers test the character at the cursor against a single
//! expected character or a character set. Each comes in a plain variant that
//! reports a miss as a value and a `_required` variant that turns the miss
//! into [`ScanErrorKind::SpecNotFound`].
//!
//! # Name Matching
//!
//! [`Scanner::match_name`] reads a maximal run of name characters and looks
//! it up in a tab-separated candidate list, accepting unambiguous
//! abbreviations. A lookup that finds nothing is undone completely: the
//! cursor returns to where the name started, so a failed keyword attempt
//! never leaks cursor movement into the next parse step.

use tracing::trace;

use crate::classify::{fold_case, is_name_char};
use crate::{Result, ScanErrorKind, ScanFlags, Scanner};

/// Separator between candidates in a name list.
pub const NAME_SEPARATOR: char = '\t';

/// Outcome of [`Scanner::match_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameMatch {
    /// The name matched the candidate at this 1-based index.
    Matched(usize),
    /// A name was present but matched no candidate.
    NoMatch,
    /// The cursor was at end of input.
    NoInput,
}

impl NameMatch {
    /// The 1-based candidate index, if matched.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            NameMatch::Matched(index) => Some(index),
            NameMatch::NoMatch | NameMatch::NoInput => None,
        }
    }
}

impl Scanner {
    /// Consume `expected` if it is at the cursor.
    pub fn match_char(&mut self, expected: char, skip_space: bool) -> bool {
        if skip_space {
            self.skip_whitespace();
        }
        if self.current() != Some(expected) {
            return false;
        }
        self.advance();
        if skip_space {
            self.skip_whitespace();
        }
        true
    }

    /// Consume `expected`, failing with the offending token if it is absent.
    pub fn match_char_required(&mut self, expected: char, skip_space: bool) -> Result<()> {
        if self.match_char(expected, skip_space) {
            return Ok(());
        }
        self.mark_token_start();
        Err(self.token_error(
            ScanFlags::TO_SPACE,
            ScanErrorKind::SpecNotFound {
                expected: format!("`{expected}`"),
            },
        ))
    }

    /// Consume the character at the cursor if it appears in `charset`.
    ///
    /// Returns its 1-based index within `charset`, or `None` at end of input
    /// or when the character is not in the set.
    pub fn match_one_of(&mut self, charset: &str, skip_space: bool) -> Option<usize> {
        if skip_space {
            self.skip_whitespace();
        }
        let c = self.current()?;
        let index = charset.chars().position(|candidate| candidate == c)? + 1;
        self.advance();
        if skip_space {
            self.skip_whitespace();
        }
        Some(index)
    }

    /// Like [`match_one_of`](Self::match_one_of), but a miss is an error.
    pub fn match_one_of_required(&mut self, charset: &str, skip_space: bool) -> Result<usize> {
        if let Some(index) = self.match_one_of(charset, skip_space) {
            return Ok(index);
        }
        self.mark_token_start();
        Err(self.token_error(
            ScanFlags::TO_SPACE,
            ScanErrorKind::SpecNotFound {
                expected: format!("one of `{charset}`"),
            },
        ))
    }

    /// Match a name at the cursor against a tab-separated list of lowercase
    /// candidates.
    ///
    /// The name may abbreviate a candidate unless `FULL_NAME` is set. An
    /// abbreviation that fits several candidates fails with
    /// [`ScanErrorKind::SpecAmbiguous`].
    pub fn match_name(&mut self, names: &str, flags: ScanFlags) -> Result<NameMatch> {
        if flags.skip_space() {
            self.skip_whitespace();
        }
        if self.current().is_none() {
            return Ok(NameMatch::NoInput);
        }
        if names.is_empty() {
            return Ok(NameMatch::NoMatch);
        }

        self.mark_token_start();
        let start = self.position();
        let mut chunk = String::new();
        while let Some(c) = self.current() {
            if !is_name_char(c, flags) {
                break;
            }
            chunk.push(fold_case(c));
            self.advance();
        }
        if chunk.is_empty() {
            return Ok(NameMatch::NoMatch);
        }

        let full_name = flags.contains(ScanFlags::FULL_NAME);
        let mut found = None;
        for (index, candidate) in names.split(NAME_SEPARATOR).enumerate() {
            let qualifies = if full_name {
                candidate == chunk
            } else {
                candidate.starts_with(chunk.as_str())
            };
            if !qualifies {
                continue;
            }
            if found.is_some() {
                return Err(self.token_error(ScanFlags::TO_LOCATION, ScanErrorKind::SpecAmbiguous));
            }
            found = Some(index + 1);
        }

        let Some(index) = found else {
            trace!(chunk = %chunk, "no name matched");
            self.restore(start);
            return Ok(NameMatch::NoMatch);
        };
        self.resolve_token_end(ScanFlags::TO_LOCATION);
        if flags.skip_space() {
            self.skip_whitespace();
        }
        trace!(chunk = %chunk, index, "name matched");
        Ok(NameMatch::Matched(index))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
