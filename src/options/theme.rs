use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Panel color scheme.
///
/// `Auto` probes the host page's background brightness client-side
/// (inside the emitted fragment) and picks light or dark accordingly.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Follow the host page's background brightness.
    #[default]
    Auto,
    /// Fixed light palette.
    Light,
    /// Fixed dark palette.
    Dark,
}

impl Theme {
    /// Value carried in the fragment's `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
