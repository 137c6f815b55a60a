//! Regression coverage for editor/validator coordination: error precedence,
//! implicit re-validation on commit, and the disabled-editor bypass.

mod support;

use formwork::prelude::*;

fn date_editor_with_required() -> (Editor, Validator) {
    support::init_logging();
    let editor = Editor::from(DateEditor::new(DateEditorConfig::default()));
    let validator = Validator::attach(&editor, vec![Rule::required()]);
    (editor, validator)
}

fn number_editor_with_required() -> (Editor, Validator) {
    support::init_logging();
    let editor = Editor::from(NumberEditor::new(NumberEditorConfig::default()));
    let validator = Validator::attach(&editor, vec![Rule::required()]);
    (editor, validator)
}

#[test]
fn date_editor_invalid_after_unparseable_commit() {
    let (editor, _validator) = date_editor_with_required();

    editor.type_text("somethingwrong");
    editor.commit();

    assert!(!editor.is_valid());
    let error = editor.validation_error().expect("editor should carry an error");
    assert!(error.editor_specific);
}

#[test]
fn simultaneous_validation_reflects_committed_text() {
    let (editor, validator) = date_editor_with_required();

    editor.type_text("somethingwrong");
    editor.commit();
    // Validate while the editor's own pass is the only one that has run;
    // the validator must re-derive rather than trust stale state.
    let outcome = validator.validate();

    assert!(!outcome.is_valid);
    assert!(!editor.is_valid());
    let error = editor.validation_error().expect("editor should carry an error");
    assert!(error.editor_specific);
    assert_eq!(validator.last_outcome(), Some(outcome));
}

#[test]
fn empty_commit_after_wrong_date_reports_required() {
    let (editor, validator) = date_editor_with_required();

    editor.type_text("somethingwrong");
    editor.commit();
    validator.validate();

    // Empty text is an acceptable null date, so the failure must now come
    // from the required rule, not the parser.
    editor.set_text("");
    editor.commit();

    assert!(!editor.is_valid());
    let error = editor.validation_error().expect("editor should carry an error");
    assert!(!error.editor_specific);
    assert_eq!(error.message, "Required");
}

#[test]
fn disabled_editor_bypasses_validation() {
    support::init_logging();
    let editor = Editor::from(TextEditor::new(TextEditorConfig {
        value: String::new(),
        disabled: true,
    }));
    let validator = Validator::attach(&editor, vec![Rule::required()]);

    let outcome = validator.validate();

    assert!(outcome.is_valid);
    assert!(editor.is_valid());
}

#[test]
fn disabled_date_editor_ignores_unparseable_value() {
    support::init_logging();
    let editor = Editor::from(DateEditor::new(DateEditorConfig {
        disabled: true,
        ..DateEditorConfig::default()
    }));
    let validator = Validator::attach(&editor, vec![Rule::required()]);

    editor.set_value("junk");

    assert!(editor.is_valid());
    assert!(validator.validate().is_valid);
}

#[test]
fn number_editor_invalid_on_non_numeric_value() {
    let (editor, _validator) = number_editor_with_required();

    editor.set_value("asd");

    assert!(!editor.is_valid());
    let error = editor.validation_error().expect("editor should carry an error");
    assert!(error.editor_specific);
    assert_eq!(error.message, "Value must be a number");
}

#[test]
fn required_retriggers_after_later_empty_commit() {
    let (editor, validator) = number_editor_with_required();

    validator.validate();
    editor.set_text("1");
    editor.commit();
    assert!(editor.is_valid());

    editor.set_text("");
    editor.commit();

    assert!(!editor.is_valid());
    let error = editor.validation_error().expect("editor should carry an error");
    assert!(!error.editor_specific);
    assert_eq!(error.message, "Required");
}

#[test]
fn validate_is_idempotent_without_changes() {
    let (editor, validator) = date_editor_with_required();

    editor.set_value("somethingwrong");
    let first = validator.validate();
    let second = validator.validate();

    assert_eq!(first, second);
    assert_eq!(editor.outcome(), second);
}

#[test]
fn validate_uses_committed_value_not_pending_keystrokes() {
    let (editor, validator) = date_editor_with_required();

    editor.set_value("2026-01-02");
    assert!(validator.validate().is_valid);

    // Keystrokes in flight: the committed value still stands.
    editor.type_text("garbage");
    assert!(editor.has_pending_input());
    assert!(validator.validate().is_valid);

    // Committing promotes the edit and implicitly re-validates.
    editor.commit();
    assert!(!editor.is_valid());
    assert!(editor.validation_error().unwrap().editor_specific);
}

#[test]
fn keystrokes_alone_do_not_commit() {
    let (editor, _validator) = date_editor_with_required();

    editor.type_text("some");
    editor.backspace();
    editor.type_text("thing");

    assert_eq!(editor.value(), "");
    assert_eq!(editor.text(), "somthing");
    assert_eq!(editor.phase(), EditorPhase::Pristine);
    assert!(editor.is_valid());
}

#[test]
fn phase_follows_the_commit_validate_cycle() {
    let (editor, validator) = date_editor_with_required();
    assert_eq!(editor.phase(), EditorPhase::Pristine);

    editor.type_text("2026-01-02");
    editor.commit();
    assert_eq!(editor.phase(), EditorPhase::Dirty);

    validator.validate();
    assert_eq!(editor.phase(), EditorPhase::Validated);

    // With a validated validator attached, a commit re-validates in the
    // same step, so the phase lands back on Validated.
    editor.set_value("2026-02-03");
    assert_eq!(editor.phase(), EditorPhase::Validated);
}

#[test]
fn commit_does_not_validate_before_first_explicit_validate() {
    let (editor, validator) = date_editor_with_required();

    editor.set_value("somethingwrong");

    // The editor's own check has run, the validator's has not.
    assert_eq!(editor.phase(), EditorPhase::Dirty);
    assert!(validator.last_outcome().is_none());
    assert!(!validator.has_validated());
}

#[test]
fn reset_returns_the_pair_to_pristine() {
    let (editor, validator) = number_editor_with_required();

    validator.validate();
    assert!(validator.has_validated());

    validator.reset();

    assert_eq!(editor.value(), "");
    assert_eq!(editor.phase(), EditorPhase::Pristine);
    assert!(editor.is_valid());
    assert!(!validator.has_validated());
    assert!(validator.last_outcome().is_none());

    // After a reset the implicit re-validation contract is pristine too:
    // a commit updates self-validity only.
    editor.set_value("5");
    assert_eq!(editor.phase(), EditorPhase::Dirty);
    assert!(validator.last_outcome().is_none());
}

#[test]
fn detached_validator_no_longer_revalidates_on_commit() {
    let (editor, validator) = number_editor_with_required();

    validator.validate();
    validator.detach();

    editor.set_value("");
    // Self-validation accepts the empty value; nothing re-runs the rules.
    assert!(editor.is_valid());
    assert_eq!(editor.phase(), EditorPhase::Dirty);
}

#[test]
fn toggling_enabled_republishes_validity() {
    let (editor, _validator) = number_editor_with_required();

    editor.set_value("asd");
    assert!(!editor.is_valid());

    editor.set_enabled(false);
    assert!(editor.is_valid());

    editor.set_enabled(true);
    assert!(!editor.is_valid());
    assert!(editor.validation_error().unwrap().editor_specific);
}
