//! Scanner configuration.

/// Characters treated as whitespace unless configured otherwise.
pub const DEFAULT_WHITESPACE: &str = " \t";

/// Configuration for a [`Scanner`](crate::Scanner).
///
/// Loaded by callers (for instance from a settings file with the `serde`
/// feature) and applied with [`Scanner::with_config`](crate::Scanner::with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// Characters skipped as whitespace and used as token boundaries.
    /// Defaults to space and horizontal tab. Empty disables skipping.
    pub whitespace: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            whitespace: DEFAULT_WHITESPACE.to_owned(),
        }
    }
}

impl ScannerConfig {
    /// Create a config with the specified whitespace set.
    pub fn with_whitespace(whitespace: impl Into<String>) -> Self {
        Self {
            whitespace: whitespace.into(),
        }
    }

    /// Check if `c` is configured as whitespace.
    #[inline]
    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(c)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
