use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editors::{Editor, EditorPhase};
use crate::state::State;

use super::outcome::ValidationOutcome;
use super::rule::Rule;

/// Unique identifier for a validator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ValidatorId(Uuid);

impl ValidatorId {
    /// Create a new unique validator ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ValidatorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) struct ValidatorInner {
    id: ValidatorId,
    editor: Editor,
    rules: Vec<Rule>,
    last_outcome: State<Option<ValidationOutcome>>,
    has_validated: AtomicBool,
}

impl ValidatorInner {
    pub(crate) fn has_validated(&self) -> bool {
        self.has_validated.load(Ordering::SeqCst)
    }

    /// One full aggregation pass. Ordered, first failure wins:
    /// disabled bypass, declared rules, then the editor's own format check.
    /// Publishes the combined outcome to both sides before returning.
    pub(crate) fn run(&self) -> ValidationOutcome {
        let editor = &self.editor;

        let outcome = if !editor.is_enabled() {
            log::debug!("validator {}: editor disabled, bypassing rules", self.id);
            ValidationOutcome::valid()
        } else {
            // Value as of the most recent commit; in-flight keystrokes do
            // not participate.
            let raw = editor.value();
            let rule_failure = self.rules.iter().find_map(|rule| {
                let error = rule.evaluate(editor, &raw)?;
                log::debug!("validator {}: {} rule failed", self.id, rule.kind());
                Some(ValidationOutcome::invalid(error))
            });
            // Re-derive self-validity rather than trusting the editor's
            // published field; it may predate the commit being validated.
            rule_failure.unwrap_or_else(|| editor.self_validity(&raw))
        };

        self.has_validated.store(true, Ordering::SeqCst);
        self.last_outcome.set(Some(outcome.clone()));
        editor.publish_outcome(outcome.clone(), EditorPhase::Validated);
        outcome
    }

    /// Forget previous passes; the pair is pristine again.
    pub(crate) fn clear(&self) {
        self.last_outcome.set(None);
        self.has_validated.store(false, Ordering::SeqCst);
    }
}

/// Aggregates declared rules with an editor's self-validation.
///
/// A validator is a cheap-clone handle bound to exactly one editor. The
/// editor keeps only a weak back-reference for implicit re-validation, so
/// the validator's lifetime ends with its last handle.
#[derive(Clone)]
pub struct Validator {
    inner: Arc<ValidatorInner>,
}

impl Validator {
    /// Attach a validator to an editor. Replaces any previously attached
    /// validator as the editor's re-validation target.
    pub fn attach(editor: &Editor, rules: Vec<Rule>) -> Self {
        let inner = Arc::new(ValidatorInner {
            id: ValidatorId::new(),
            editor: editor.clone(),
            rules,
            last_outcome: State::default(),
            has_validated: AtomicBool::new(false),
        });
        editor.bind_validator(Arc::downgrade(&inner));
        log::debug!(
            "validator {} attached to {} editor {}",
            inner.id,
            editor.kind().as_str(),
            editor.id()
        );
        Self { inner }
    }

    pub fn id(&self) -> ValidatorId {
        self.inner.id
    }

    pub fn editor(&self) -> &Editor {
        &self.inner.editor
    }

    pub fn rules(&self) -> &[Rule] {
        &self.inner.rules
    }

    /// Synchronously compute, publish and return the combined outcome.
    pub fn validate(&self) -> ValidationOutcome {
        self.inner.run()
    }

    /// Outcome of the most recent pass, if any.
    pub fn last_outcome(&self) -> Option<ValidationOutcome> {
        self.inner.last_outcome.get()
    }

    /// Whether this validator has run at least once since creation or the
    /// last reset. Commits only re-validate implicitly once this is true.
    pub fn has_validated(&self) -> bool {
        self.inner.has_validated()
    }

    /// Clear the pair back to pristine: the editor's value and published
    /// outcome, and this validator's memory of previous passes.
    pub fn reset(&self) {
        self.inner.clear();
        self.inner.editor.reset();
    }

    /// Stop receiving implicit re-validation from the editor. No-op if a
    /// different validator has since been attached.
    pub fn detach(&self) {
        self.inner.editor.unbind_validator(&self.inner);
        log::debug!("validator {} detached", self.inner.id);
    }
}
