use crate::validation::{SelfValidating, ValidationOutcome};

use super::config::NumberEditorConfig;
use super::core::{EditorCore, EditorPhase};

/// Numeric editor.
///
/// Committed text must parse as a number; parseable values are clamped to
/// the configured bounds on commit.
#[derive(Clone)]
pub struct NumberEditor {
    pub(crate) core: EditorCore,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberEditor {
    pub fn new(config: NumberEditorConfig) -> Self {
        let editor = Self {
            core: EditorCore::new(config.value, config.disabled),
            min: config.min,
            max: config.max,
        };
        if editor.core.is_enabled() {
            let validity = editor.self_validity(&editor.core.committed());
            editor.core.publish(validity, EditorPhase::Pristine);
        }
        editor
    }

    /// The committed value as a number, `None` when empty or unparseable.
    pub fn number(&self) -> Option<f64> {
        self.core.committed().trim().parse().ok()
    }

    fn clamp(&self, value: f64) -> f64 {
        let value = match self.min {
            Some(min) if value < min => min,
            _ => value,
        };
        match self.max {
            Some(max) if value > max => max,
            _ => value,
        }
    }
}

impl SelfValidating for NumberEditor {
    fn self_validity(&self, raw: &str) -> ValidationOutcome {
        let text = raw.trim();
        if text.is_empty() || text.parse::<f64>().is_ok() {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::editor_failure("Value must be a number")
        }
    }

    fn normalize(&self, raw: String) -> String {
        match raw.trim().parse::<f64>() {
            Ok(value) => {
                let clamped = self.clamp(value);
                if clamped == value {
                    raw
                } else {
                    clamped.to_string()
                }
            }
            Err(_) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_text_is_editor_specific() {
        let editor = NumberEditor::new(NumberEditorConfig::default());
        let outcome = editor.self_validity("asd");
        assert!(!outcome.is_valid);
        let error = outcome.error.unwrap();
        assert!(error.editor_specific);
        assert_eq!(error.message, "Value must be a number");
    }

    #[test]
    fn empty_text_self_validates_as_null() {
        let editor = NumberEditor::new(NumberEditorConfig::default());
        assert!(editor.self_validity("").is_valid);
        assert!(editor.number().is_none());
    }

    #[test]
    fn normalize_clamps_into_bounds() {
        let editor = NumberEditor::new(NumberEditorConfig {
            min: Some(0.0),
            max: Some(10.0),
            ..NumberEditorConfig::default()
        });
        assert_eq!(editor.normalize("42".to_string()), "10");
        assert_eq!(editor.normalize("-3".to_string()), "0");
        assert_eq!(editor.normalize("7".to_string()), "7");
        assert_eq!(editor.normalize("asd".to_string()), "asd");
    }
}
