//! Cursor-based text scanner.
//!
//! A [`Scanner`] owns a resident string and reads it front to back:
//! whitespace-aware tokens, single characters and character sets,
//! abbreviation-tolerant keywords, integers, floats, strings and lines.
//!
//! # Architecture
//!
//! - **Cursor core** ([`Scanner`]): text, position, whitespace set
//! - **Token window**: start and end of the last token, tracked apart from
//!   the cursor so failures can report the offending text
//! - **Primitives**: peek, next, look-ahead, end-of-input checks
//! - **Matchers**: fixed characters, character sets and [`NameMatch`] lookup
//! - **Literal readers**: numbers, strings, words and lines
//!
//! Every fallible operation returns [`Result`]; nothing panics on input.
//!
//! # Example
//!
//! ```
//! use scan_engine::{NameMatch, ScanFlags, Scanner};
//!
//! let mut scanner = Scanner::new("set width 0x20");
//! let flags = ScanFlags::SKIP_SPACE;
//! assert_eq!(scanner.match_name("get\tset", flags)?, NameMatch::Matched(2));
//! assert_eq!(scanner.get_next_token(true), "width");
//! assert_eq!(scanner.get_unsigned_number(flags | ScanFlags::HEX, 0)?, 32);
//! scanner.assert_end_of_input(true)?;
//! # Ok::<(), scan_engine::ScanError>(())
//! ```

pub mod classify;
mod config;
mod error;
mod flags;
mod literals;
mod matchers;
mod scanner;
mod token_window;

pub use classify::{hex_digit_value, is_hex_digit};
pub use config::{ScannerConfig, DEFAULT_WHITESPACE};
pub use error::{Result, ScanError, ScanErrorKind};
pub use flags::ScanFlags;
pub use matchers::{NameMatch, NAME_SEPARATOR};
pub use scanner::Scanner;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber for the scanner's `tracing` events.
///
/// Does nothing unless `RUST_LOG` holds a valid filter, and nothing if the
/// process already has a global subscriber. Later calls are no-ops.
/// `RUST_LOG=scan_engine=debug` shows every scan error with its token;
/// `RUST_LOG=scan_engine=trace` adds each cursor step and literal.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time();
        // Fails only when another subscriber is already installed.
        let _ = tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init();
    });
}
