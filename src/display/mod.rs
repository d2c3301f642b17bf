// src/display/mod.rs

//! Display target abstraction.
//!
//! The driver never knows what it is drawing on. It only writes an icon
//! name, label markup and tooltip markup through [`IndicatorDisplay`] and
//! calls [`IndicatorDisplay::commit`] once per cycle.
//!
//! - [`PresentationState`] is the plain in-memory value of what is shown.
//! - [`json::JsonLinesDisplay`] renders that state as one JSON object per
//!   line (status-bar custom module format).
//! - [`markup`] escapes untrusted text before it is shown as markup.

pub mod json;
pub mod markup;

use anyhow::Result;

pub use json::JsonLinesDisplay;
pub use markup::escape_markup;

pub const INITIAL_ICON: &str = "utilities-terminal-symbolic";
pub const INITIAL_LABEL: &str = "Loading...";
pub const INITIAL_TOOLTIP: &str = "Initializing...";

/// Label shown when the configured script does not exist.
pub const NOT_FOUND_LABEL: &str = "Script not found";
/// Label shown for every other failure.
pub const ERROR_LABEL: &str = "Error";

/// Capability interface for whatever renders the indicator.
pub trait IndicatorDisplay: Send {
    fn set_icon(&mut self, icon: &str) -> Result<()>;

    fn set_label_markup(&mut self, markup: &str) -> Result<()>;

    fn set_tooltip_markup(&mut self, markup: &str) -> Result<()>;

    /// Called once after all setters of a cycle.
    fn commit(&mut self) -> Result<()> {
        Ok(())
    }
}

/// What the indicator currently shows. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    pub icon: String,
    pub label_markup: String,
    pub tooltip_markup: String,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            icon: INITIAL_ICON.to_string(),
            label_markup: INITIAL_LABEL.to_string(),
            tooltip_markup: INITIAL_TOOLTIP.to_string(),
        }
    }
}

impl IndicatorDisplay for PresentationState {
    fn set_icon(&mut self, icon: &str) -> Result<()> {
        self.icon = icon.to_string();
        Ok(())
    }

    fn set_label_markup(&mut self, markup: &str) -> Result<()> {
        self.label_markup = markup.to_string();
        Ok(())
    }

    fn set_tooltip_markup(&mut self, markup: &str) -> Result<()> {
        self.tooltip_markup = markup.to_string();
        Ok(())
    }
}
