//! Typed per-variant editor configuration.

use serde::{Deserialize, Serialize};

/// Date selection surface presented next to a date editor.
///
/// Carried as configuration only; rendering is outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerType {
    #[default]
    Calendar,
    Rollers,
    Native,
}

/// Configuration for [`TextEditor`](super::TextEditor).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextEditorConfig {
    /// Initial committed value.
    pub value: String,
    pub disabled: bool,
}

/// Configuration for [`DateEditor`](super::DateEditor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateEditorConfig {
    /// Initial committed value (raw text, parsed like typed input).
    pub value: String,
    pub disabled: bool,
    pub picker_type: PickerType,
    /// `chrono` format strings accepted when parsing committed text, tried
    /// in order. Each is tried as a date-time first, then as a plain date.
    pub formats: Vec<String>,
}

impl Default for DateEditorConfig {
    fn default() -> Self {
        Self {
            value: String::new(),
            disabled: false,
            picker_type: PickerType::default(),
            formats: vec![
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M".to_string(),
                "%Y-%m-%d".to_string(),
                "%m/%d/%Y".to_string(),
            ],
        }
    }
}

/// Configuration for [`NumberEditor`](super::NumberEditor).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberEditorConfig {
    /// Initial committed value (raw text, parsed like typed input).
    pub value: String,
    pub disabled: bool,
    /// Committed values below this are clamped up to it.
    pub min: Option<f64>,
    /// Committed values above this are clamped down to it.
    pub max: Option<f64>,
}
