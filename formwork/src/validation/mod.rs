//! Editor/validator coordination.
//!
//! A [`Validator`](crate::validation::Validator) attaches to an editor and
//! combines declarative [`Rule`](crate::validation::Rule) evaluation with the
//! editor's own format check into a single
//! [`ValidationOutcome`](crate::validation::ValidationOutcome), published to
//! both sides of the pair in the same synchronous step.
//!
//! # Example
//!
//! ```
//! use formwork::prelude::*;
//!
//! let editor = Editor::from(DateEditor::new(DateEditorConfig::default()));
//! let validator = Validator::attach(&editor, vec![Rule::required()]);
//!
//! editor.set_value("not a date");
//! let outcome = validator.validate();
//!
//! assert!(!outcome.is_valid);
//! assert!(outcome.error.unwrap().editor_specific);
//! ```

mod group;
mod outcome;
mod rule;
mod validatable;
pub(crate) mod validator;

pub use group::{GroupError, GroupOutcome, ValidationGroups};
pub use outcome::{ValidationError, ValidationOutcome};
pub use rule::{CustomCheck, Rule, RuleError};
pub use validatable::SelfValidating;
pub use validator::{Validator, ValidatorId};
