use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlyoutError;

/// Which viewport edge the panel is anchored to.
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
pub enum Side {
    /// Anchor to the left viewport edge.
    Left,
    /// Anchor to the right viewport edge.
    #[default]
    Right,
}

impl Side {
    /// CSS property name used to pin the panel to its edge.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Edge of the panel nearest the page content, where the close
    /// control sits.
    #[must_use]
    pub const fn near_corner(self) -> &'static str {
        match self {
            Self::Left => "right",
            Self::Right => "left",
        }
    }

    /// Off-screen X translation the slide-in transition starts from.
    #[must_use]
    pub const fn slide_offset(self) -> &'static str {
        match self {
            Self::Left => "-100%",
            Self::Right => "100%",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Side {
    type Err = FlyoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(FlyoutError::InvalidParameter(format!(
                "unsupported side {other:?} (expected \"left\" or \
                 \"right\")"
            ))),
        }
    }
}
