//! Crate-level error types.

use std::fmt;

/// Errors produced by the flyout crate.
#[derive(Debug)]
pub enum FlyoutError {
    /// A panel parameter had an unsupported value (e.g. an anchor side
    /// other than `left`/`right`). Surfaced synchronously; no fragment
    /// is emitted for that invocation.
    InvalidParameter(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The host's injection primitive failed to embed the fragment.
    Host(String),
}

impl fmt::Display for FlyoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Host(msg) => write!(f, "host injection error: {msg}"),
        }
    }
}

impl std::error::Error for FlyoutError {}
