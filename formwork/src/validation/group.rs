use std::collections::HashMap;

use thiserror::Error;

use super::outcome::{ValidationError, ValidationOutcome};
use super::validator::{Validator, ValidatorId};

/// Error operating on a validation group.
#[derive(Debug, Clone, Error)]
pub enum GroupError {
    #[error("unknown validation group '{name}'")]
    UnknownGroup { name: String },
}

/// Per-member results of validating a group.
#[derive(Debug, Clone)]
pub struct GroupOutcome {
    results: Vec<(ValidatorId, ValidationOutcome)>,
}

impl GroupOutcome {
    /// Whether every member of the group passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, outcome)| outcome.is_valid)
    }

    /// Member outcomes in registration order.
    pub fn results(&self) -> &[(ValidatorId, ValidationOutcome)] {
        &self.results
    }

    /// The first failing member, if any.
    pub fn first_failure(&self) -> Option<(ValidatorId, &ValidationError)> {
        self.results.iter().find_map(|(id, outcome)| {
            outcome.error.as_ref().map(|error| (*id, error))
        })
    }
}

/// Registry of named validation groups.
///
/// An explicitly constructed value, passed to whoever needs it; process-wide
/// reset is "drop it and build a new one". Validators belong to at most one
/// group at a time.
///
/// # Example
///
/// ```
/// use formwork::prelude::*;
///
/// let editor = Editor::from(TextEditor::new(TextEditorConfig::default()));
/// let validator = Validator::attach(&editor, vec![Rule::required()]);
///
/// let mut groups = ValidationGroups::new();
/// groups.register("signup", validator);
///
/// let outcome = groups.validate_group("signup").unwrap();
/// assert!(!outcome.is_valid());
/// ```
#[derive(Default)]
pub struct ValidationGroups {
    groups: HashMap<String, Vec<Validator>>,
}

impl ValidationGroups {
    /// Create a fresh, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validator to a group, creating the group on first use. A
    /// validator already registered elsewhere is moved, not duplicated.
    pub fn register(&mut self, group: impl Into<String>, validator: Validator) {
        let group = group.into();
        self.deregister(&validator);
        log::debug!("validator {} registered in group '{}'", validator.id(), group);
        self.groups.entry(group).or_default().push(validator);
    }

    /// Remove a validator from whichever group holds it. Returns whether it
    /// was registered. The emptied group stays registered.
    pub fn deregister(&mut self, validator: &Validator) -> bool {
        let id = validator.id();
        for members in self.groups.values_mut() {
            let before = members.len();
            members.retain(|member| member.id() != id);
            if members.len() != before {
                return true;
            }
        }
        false
    }

    /// Run every member's `validate()` in registration order.
    pub fn validate_group(&self, group: &str) -> Result<GroupOutcome, GroupError> {
        let members = self.members(group)?;
        log::debug!("validating group '{}' ({} members)", group, members.len());
        let results = members
            .iter()
            .map(|member| (member.id(), member.validate()))
            .collect();
        Ok(GroupOutcome { results })
    }

    /// Reset every member of a group back to pristine.
    pub fn reset_group(&self, group: &str) -> Result<(), GroupError> {
        for member in self.members(group)? {
            member.reset();
        }
        Ok(())
    }

    /// Names of all registered groups, in no particular order.
    pub fn groups(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Members of a group in registration order.
    pub fn members(&self, group: &str) -> Result<&[Validator], GroupError> {
        self.groups
            .get(group)
            .map(Vec::as_slice)
            .ok_or_else(|| GroupError::UnknownGroup {
                name: group.to_string(),
            })
    }
}
