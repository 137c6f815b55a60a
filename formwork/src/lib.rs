pub mod editors;
pub mod state;
pub mod validation;

pub use state::State;

pub mod prelude {
    pub use crate::editors::{
        DateEditor, DateEditorConfig, Editor, EditorId, EditorKind, EditorPhase, NumberEditor,
        NumberEditorConfig, PickerType, TextEditor, TextEditorConfig,
    };
    pub use crate::state::State;
    pub use crate::validation::{
        GroupError, GroupOutcome, Rule, RuleError, ValidationError, ValidationGroups,
        ValidationOutcome, Validator, ValidatorId,
    };
}
