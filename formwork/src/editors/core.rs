use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::State;
use crate::validation::ValidationOutcome;
use crate::validation::validator::ValidatorInner;

/// Unique identifier for an editor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct EditorId(Uuid);

impl EditorId {
    /// Create a new unique editor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EditorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EditorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an editor stands in the commit/validate cycle.
///
/// `Pristine → Dirty` on a committed change, `Dirty → Validated` on
/// validation, and any later committed change returns to `Dirty`. The cycle
/// repeats for the lifetime of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorPhase {
    /// No committed change since creation or reset.
    #[default]
    Pristine,
    /// A committed change has not been validated yet.
    Dirty,
    /// The published outcome reflects the current committed value.
    Validated,
}

/// State shared by every editor variant.
///
/// All fields are `State` cells, so variant structs stay cheap to clone and
/// every clone observes the same editor.
#[derive(Clone)]
pub(crate) struct EditorCore {
    id: EditorId,
    /// Value as of the most recent commit.
    committed: State<String>,
    /// Uncommitted keystrokes; `None` when no edit is in flight.
    buffer: State<Option<String>>,
    enabled: State<bool>,
    /// Published outcome: the editor's own self-validity, or the combined
    /// outcome once a validator has run.
    outcome: State<ValidationOutcome>,
    phase: State<EditorPhase>,
    /// Back-reference to the attached validator, if any. Weak: the
    /// validator owns the editor handle, never the other way around.
    validator: State<Option<Weak<ValidatorInner>>>,
}

impl EditorCore {
    pub(crate) fn new(value: String, disabled: bool) -> Self {
        Self {
            id: EditorId::new(),
            committed: State::new(value),
            buffer: State::default(),
            enabled: State::new(!disabled),
            outcome: State::default(),
            phase: State::default(),
            validator: State::default(),
        }
    }

    pub(crate) fn id(&self) -> EditorId {
        self.id
    }

    pub(crate) fn committed(&self) -> String {
        self.committed.get()
    }

    pub(crate) fn set_committed(&self, value: String) {
        self.committed.set(value);
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub(crate) fn buffer(&self) -> Option<String> {
        self.buffer.get()
    }

    /// Append typed text to the in-flight edit, starting one from the
    /// committed value if necessary.
    pub(crate) fn push_text(&self, text: &str) {
        let committed = self.committed.get();
        self.buffer.update(|buffer| {
            buffer.get_or_insert_with(|| committed).push_str(text);
        });
    }

    pub(crate) fn pop_char(&self) {
        let committed = self.committed.get();
        self.buffer.update(|buffer| {
            buffer.get_or_insert_with(|| committed).pop();
        });
    }

    pub(crate) fn set_buffer(&self, text: String) {
        self.buffer.set(Some(text));
    }

    pub(crate) fn take_buffer(&self) -> Option<String> {
        self.buffer.replace(None)
    }

    pub(crate) fn clear_buffer(&self) {
        self.buffer.set(None);
    }

    pub(crate) fn outcome(&self) -> ValidationOutcome {
        self.outcome.get()
    }

    pub(crate) fn phase(&self) -> EditorPhase {
        self.phase.get()
    }

    pub(crate) fn publish(&self, outcome: ValidationOutcome, phase: EditorPhase) {
        self.outcome.set(outcome);
        self.phase.set(phase);
    }

    pub(crate) fn bind_validator(&self, validator: Weak<ValidatorInner>) {
        self.validator.set(Some(validator));
    }

    pub(crate) fn unbind_validator(&self) {
        self.validator.set(None);
    }

    pub(crate) fn attached_validator(&self) -> Option<Arc<ValidatorInner>> {
        self.validator.read(|slot| slot.as_ref().and_then(Weak::upgrade))
    }

    /// Whether the given validator is the one bound to this editor.
    pub(crate) fn is_bound_to(&self, validator: &Arc<ValidatorInner>) -> bool {
        self.attached_validator()
            .is_some_and(|bound| Arc::ptr_eq(&bound, validator))
    }

    pub(crate) fn reset(&self) {
        self.committed.set(String::new());
        self.buffer.set(None);
        self.publish(ValidationOutcome::valid(), EditorPhase::Pristine);
    }
}
