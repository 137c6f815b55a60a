use chrono::{NaiveDate, NaiveDateTime};

use crate::validation::{SelfValidating, ValidationOutcome};

use super::config::{DateEditorConfig, PickerType};
use super::core::{EditorCore, EditorPhase};

/// Date/date-time editor.
///
/// Committed text is parsed against the configured `chrono` formats.
/// Empty text is the intentional-null representation: it self-validates
/// as a successful `None` date, so a `Required` rule (not a parse error)
/// is what rejects it.
#[derive(Clone)]
pub struct DateEditor {
    pub(crate) core: EditorCore,
    picker_type: PickerType,
    formats: Vec<String>,
}

impl DateEditor {
    pub fn new(config: DateEditorConfig) -> Self {
        let editor = Self {
            core: EditorCore::new(config.value, config.disabled),
            picker_type: config.picker_type,
            formats: config.formats,
        };
        if editor.core.is_enabled() {
            let validity = editor.self_validity(&editor.core.committed());
            editor.core.publish(validity, EditorPhase::Pristine);
        }
        editor
    }

    pub fn picker_type(&self) -> PickerType {
        self.picker_type
    }

    /// The committed value as a date, `None` when empty or unparseable.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.parse(self.core.committed().trim())
    }

    fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        self.formats.iter().find_map(|format| {
            NaiveDateTime::parse_from_str(text, format).ok().or_else(|| {
                NaiveDate::parse_from_str(text, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
    }
}

impl SelfValidating for DateEditor {
    fn self_validity(&self, raw: &str) -> ValidationOutcome {
        let text = raw.trim();
        // Empty text means "no date", not a malformed one.
        if text.is_empty() || self.parse(text).is_some() {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::editor_failure("Value must be a date")
        }
    }
}
