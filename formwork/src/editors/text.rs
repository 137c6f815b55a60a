use crate::validation::{SelfValidating, ValidationOutcome};

use super::config::TextEditorConfig;
use super::core::EditorCore;

/// Free-text editor. Any committed text is well-formed, so self-validation
/// always succeeds; only declared rules can fail it.
#[derive(Clone)]
pub struct TextEditor {
    pub(crate) core: EditorCore,
}

impl TextEditor {
    pub fn new(config: TextEditorConfig) -> Self {
        Self {
            core: EditorCore::new(config.value, config.disabled),
        }
    }
}

impl SelfValidating for TextEditor {
    fn self_validity(&self, _raw: &str) -> ValidationOutcome {
        ValidationOutcome::valid()
    }
}
