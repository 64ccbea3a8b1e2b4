//! Panel configuration with TOML preset support.
//!
//! All recognized panel options (width, anchor side, close control,
//! theme) are consolidated here. Options serialize to/from TOML so
//! hosts can ship panel presets alongside their own configuration.

mod side;
mod theme;
mod width;

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use side::Side;
pub use theme::Theme;
pub use width::DEFAULT_WIDTH;
pub(crate) use width::sanitize_width;

use crate::error::FlyoutError;

/// Recognized panel options with explicit defaults. Uses
/// `#[serde(default)]` so partial TOML files (e.g. only overriding
/// `side`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[serde(default)]
pub struct PanelOptions {
    /// Panel width as a CSS length (numeric+unit or percentage).
    /// Malformed values degrade to [`DEFAULT_WIDTH`] at render time.
    #[schemars(title = "Width")]
    pub width: String,
    /// Which viewport edge the panel is anchored to.
    #[schemars(title = "Side")]
    pub side: Side,
    /// Whether the panel carries a close control.
    #[schemars(title = "Closable")]
    pub closable: bool,
    /// Panel color scheme.
    #[schemars(title = "Theme")]
    pub theme: Theme,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_owned(),
            side: Side::default(),
            closable: true,
            theme: Theme::default(),
        }
    }
}

impl PanelOptions {
    /// Generate JSON Schema describing the recognized panel options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(PanelOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlyoutError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FlyoutError::OptionsParse(e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| FlyoutError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlyoutError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlyoutError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FlyoutError::OptionsParse(e.to_string()))?;
        }
        std::fs::write(path, content)
            .map_err(|e| FlyoutError::OptionsParse(e.to_string()))
    }
}
