//! Config - Gallery Configuration

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::theme::input_style::{InputSize, InputVariant};

/// Configuration of the component gallery binary
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// UI language; detected from the OS when absent
    pub locale: Option<Locale>,
    /// Main window settings
    pub window: WindowConfig,
    /// Demo table settings
    pub table: TableDemoConfig,
    /// Demo input settings
    pub input: InputDemoConfig,
}

/// Main window size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 860.0,
        }
    }
}

/// Settings applied to the demo DataTable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableDemoConfig {
    /// Show row checkboxes
    pub selectable: bool,
    /// Start in the loading state
    pub loading: bool,
    /// Message for an empty table; the localized default when absent
    pub empty_message: Option<String>,
}

impl Default for TableDemoConfig {
    fn default() -> Self {
        Self {
            selectable: true,
            loading: false,
            empty_message: None,
        }
    }
}

/// Settings applied to the demo InputFields
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InputDemoConfig {
    pub variant: InputVariant,
    pub size: InputSize,
}
