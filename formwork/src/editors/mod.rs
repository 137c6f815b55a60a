//! Editor variants and the shared commit plumbing.
//!
//! Editors are cheap-clone handles over shared interior state. Keystroke
//! edits accumulate in an uncommitted buffer; only [`Editor::commit`] (or a
//! programmatic [`Editor::set_value`]) publishes a value change, re-derives
//! the editor's own validity and, when an attached validator has already
//! run once, implicitly re-validates.

mod config;
mod core;
mod date;
mod number;
mod text;

pub use config::{DateEditorConfig, NumberEditorConfig, PickerType, TextEditorConfig};
pub use date::DateEditor;
pub use number::NumberEditor;
pub use text::TextEditor;

pub use self::core::{EditorId, EditorPhase};

use self::core::EditorCore;
use crate::validation::validator::ValidatorInner;
use crate::validation::{SelfValidating, ValidationError, ValidationOutcome};
use std::sync::{Arc, Weak};

/// Discriminant for the editor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    Text,
    Date,
    Number,
}

impl EditorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorKind::Text => "text",
            EditorKind::Date => "date",
            EditorKind::Number => "number",
        }
    }
}

/// A form input editor.
///
/// Tagged variant over the concrete editor types; all shared operations
/// live here, variant-specific accessors on the variant structs.
#[derive(Clone)]
pub enum Editor {
    Text(TextEditor),
    Date(DateEditor),
    Number(NumberEditor),
}

impl Editor {
    fn core(&self) -> &EditorCore {
        match self {
            Editor::Text(editor) => &editor.core,
            Editor::Date(editor) => &editor.core,
            Editor::Number(editor) => &editor.core,
        }
    }

    fn checker(&self) -> &dyn SelfValidating {
        match self {
            Editor::Text(editor) => editor,
            Editor::Date(editor) => editor,
            Editor::Number(editor) => editor,
        }
    }

    pub fn id(&self) -> EditorId {
        self.core().id()
    }

    pub fn kind(&self) -> EditorKind {
        match self {
            Editor::Text(_) => EditorKind::Text,
            Editor::Date(_) => EditorKind::Date,
            Editor::Number(_) => EditorKind::Number,
        }
    }

    /// Value as of the most recent commit.
    pub fn value(&self) -> String {
        self.core().committed()
    }

    /// Text the input currently shows: the in-flight edit if one exists,
    /// otherwise the committed value.
    pub fn text(&self) -> String {
        let core = self.core();
        core.buffer().unwrap_or_else(|| core.committed())
    }

    /// Whether keystrokes are buffered but not yet committed.
    pub fn has_pending_input(&self) -> bool {
        self.core().buffer().is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.core().is_enabled()
    }

    /// Enable or disable the editor. A disabled editor observably reports
    /// valid regardless of its value; re-enabling restores the self-check.
    pub fn set_enabled(&self, enabled: bool) {
        let core = self.core();
        core.set_enabled(enabled);
        let validity = if enabled {
            self.checker().self_validity(&core.committed())
        } else {
            ValidationOutcome::valid()
        };
        core.publish(validity, core.phase());
    }

    pub fn is_valid(&self) -> bool {
        self.core().outcome().is_valid
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.core().outcome().error
    }

    /// The currently published outcome: the editor's own self-validity, or
    /// the combined outcome once a validator has run.
    pub fn outcome(&self) -> ValidationOutcome {
        self.core().outcome()
    }

    pub fn phase(&self) -> EditorPhase {
        self.core().phase()
    }

    /// Append typed text to the uncommitted edit buffer. No validation
    /// side effects; keystrokes are not commits.
    pub fn type_text(&self, text: &str) {
        self.core().push_text(text);
    }

    /// Delete the last character of the uncommitted edit buffer.
    pub fn backspace(&self) {
        self.core().pop_char();
    }

    /// Replace the uncommitted edit buffer wholesale.
    pub fn set_text(&self, text: &str) {
        self.core().set_buffer(text.to_string());
    }

    /// Commit the in-flight edit, if any, as the new value.
    pub fn commit(&self) {
        if let Some(raw) = self.core().take_buffer() {
            self.apply_commit(raw);
        }
    }

    /// Programmatic committed change; discards any in-flight edit.
    pub fn set_value(&self, value: &str) {
        self.core().clear_buffer();
        self.apply_commit(value.to_string());
    }

    fn apply_commit(&self, raw: String) {
        let raw = self.checker().normalize(raw);
        let core = self.core();
        core.set_committed(raw.clone());

        // The editor's own observable validity updates on every commit,
        // validator attached or not. Disabled editors are exempt.
        let validity = if core.is_enabled() {
            self.checker().self_validity(&raw)
        } else {
            ValidationOutcome::valid()
        };
        core.publish(validity, EditorPhase::Dirty);
        log::trace!("{} editor {} committed {:?}", self.kind().as_str(), core.id(), raw);

        // Implicit re-validation, once the attached validator has run before.
        if let Some(validator) = core.attached_validator()
            && validator.has_validated()
        {
            validator.run();
        }
    }

    /// Clear the value and return the pair to its pristine state.
    pub fn reset(&self) {
        if let Some(validator) = self.core().attached_validator() {
            validator.clear();
        }
        self.core().reset();
        log::debug!("editor {} reset", self.id());
    }

    pub fn as_text(&self) -> Option<&TextEditor> {
        match self {
            Editor::Text(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateEditor> {
        match self {
            Editor::Date(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&NumberEditor> {
        match self {
            Editor::Number(editor) => Some(editor),
            _ => None,
        }
    }

    pub(crate) fn self_validity(&self, raw: &str) -> ValidationOutcome {
        self.checker().self_validity(raw)
    }

    pub(crate) fn is_empty_value(&self, raw: &str) -> bool {
        self.checker().is_empty_value(raw)
    }

    pub(crate) fn publish_outcome(&self, outcome: ValidationOutcome, phase: EditorPhase) {
        self.core().publish(outcome, phase);
    }

    pub(crate) fn bind_validator(&self, validator: Weak<ValidatorInner>) {
        self.core().bind_validator(validator);
    }

    pub(crate) fn unbind_validator(&self, validator: &Arc<ValidatorInner>) {
        if self.core().is_bound_to(validator) {
            self.core().unbind_validator();
        }
    }
}

impl From<TextEditor> for Editor {
    fn from(editor: TextEditor) -> Self {
        Editor::Text(editor)
    }
}

impl From<DateEditor> for Editor {
    fn from(editor: DateEditor) -> Self {
        Editor::Date(editor)
    }
}

impl From<NumberEditor> for Editor {
    fn from(editor: NumberEditor) -> Self {
        Editor::Number(editor)
    }
}
