//! Per-call option flags.
//!
//! One bitset selects the behavior variants of every scanner operation.
//! Flags are organized into categories:
//! - **Spacing**: skip whitespace around the operation.
//! - **Numbers**: sign, hex and decimal separator handling.
//! - **Names**: which extra characters a keyword may contain.
//! - **Strings**: quoting requirement.
//! - **Token end**: how the token window's end is resolved.

use bitflags::bitflags;

bitflags! {
    /// Option flags accepted by scanner operations.
    ///
    /// Some flags imply others (`HEX_ONLY` implies `HEX`); readers apply
    /// [`ScanFlags::normalized`] on entry.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ScanFlags: u32 {
        // === Spacing (bit 0) ===

        /// Skip whitespace before and after the operation.
        const SKIP_SPACE = 1 << 0;

        // === Numbers (bits 1-3, 12) ===

        /// Permit a leading `-`.
        const SIGNED = 1 << 1;
        /// Permit hex digits and a `0x` prefix.
        const HEX = 1 << 2;
        /// Permit hex digits without prefix handling. Implies `HEX`.
        const HEX_ONLY = 1 << 3;
        /// Accept `,` as decimal separator.
        const COMMA = 1 << 12;

        // === Names (bits 4-7) ===

        /// Permit digits within names.
        const DIGITS = 1 << 4;
        /// Require exact-length name matches (no abbreviation).
        const FULL_NAME = 1 << 5;
        /// Permit `_` and `-` within names.
        const EXTRA_CHAR = 1 << 6;
        /// Permit the accented letters `ä ö ü Ä Ö Ü ß` within names.
        const UMLAUTE = 1 << 7;

        // === Strings (bit 8) ===

        /// Require quotes around a string literal.
        const QUOTED = 1 << 8;

        // === Token End (bits 9-11) ===

        /// Token ends at the next whitespace.
        const TO_SPACE = 1 << 9;
        /// Token ends at the cursor.
        const TO_LOCATION = 1 << 10;
        /// Token ends at the end of the text.
        const TO_END = 1 << 11;
    }
}

impl ScanFlags {
    /// All flags that select a token-end resolution mode.
    pub const TOKEN_END_MASK: Self = Self::TO_SPACE.union(Self::TO_LOCATION).union(Self::TO_END);

    /// Apply implied flags.
    #[inline]
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.contains(Self::HEX_ONLY) {
            self.union(Self::HEX)
        } else {
            self
        }
    }

    /// Check whether whitespace should be skipped around the operation.
    #[inline]
    pub const fn skip_space(self) -> bool {
        self.contains(Self::SKIP_SPACE)
    }

    /// Only the token-end bits of `self`.
    #[inline]
    #[must_use]
    pub const fn token_end(self) -> Self {
        self.intersection(Self::TOKEN_END_MASK)
    }

    /// Convert a plain `skip_space` argument into flags.
    #[inline]
    pub const fn from_skip(skip_space: bool) -> Self {
        if skip_space {
            Self::SKIP_SPACE
        } else {
            Self::empty()
        }
    }
}
