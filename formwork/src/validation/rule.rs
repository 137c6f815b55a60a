use std::fmt;
use std::sync::Arc;

use email_address::EmailAddress;
use regex::Regex;
use thiserror::Error;

use crate::editors::Editor;

use super::outcome::ValidationError;

/// Error building a rule from user-supplied input.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The pattern rule was given a string that is not a valid regex.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Check used by [`Rule::Custom`].
pub type CustomCheck = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A declarative validation constraint.
///
/// Rules are evaluated by a [`Validator`](super::Validator) in declaration
/// order against the editor's committed raw value; the first failure wins.
/// Every kind carries an optional message overriding its default.
#[derive(Clone)]
pub enum Rule {
    /// Fails when the committed value is empty (or the editor's
    /// type-specific null representation, e.g. a date editor's empty text).
    Required { message: Option<String> },
    /// Bounds on the value's character count.
    StringLength {
        min: Option<usize>,
        max: Option<usize>,
        message: Option<String>,
    },
    /// The value must match the given regex.
    Pattern {
        pattern: Regex,
        message: Option<String>,
    },
    /// The value must be a well-formed email address. Empty values pass;
    /// pair with [`Rule::Required`] to also reject empty input.
    Email { message: Option<String> },
    /// Bounds on the parsed numeric value. Raw text that does not parse as
    /// a number passes; format failures belong to the editor's own check.
    Range {
        min: Option<f64>,
        max: Option<f64>,
        message: Option<String>,
    },
    /// Arbitrary predicate over the raw value.
    Custom {
        check: CustomCheck,
        message: Option<String>,
    },
}

impl Rule {
    pub fn required() -> Self {
        Rule::Required { message: None }
    }

    pub fn string_length(min: Option<usize>, max: Option<usize>) -> Self {
        Rule::StringLength {
            min,
            max,
            message: None,
        }
    }

    /// Build a pattern rule, rejecting invalid regexes instead of panicking.
    pub fn pattern(pattern: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Rule::Pattern {
            pattern: regex,
            message: None,
        })
    }

    pub fn email() -> Self {
        Rule::Email { message: None }
    }

    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        Rule::Range {
            min,
            max,
            message: None,
        }
    }

    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Rule::Custom {
            check: Arc::new(check),
            message: None,
        }
    }

    /// Replace the rule's message with a custom one.
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        match &mut self {
            Rule::Required { message }
            | Rule::StringLength { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::Email { message }
            | Rule::Range { message, .. }
            | Rule::Custom { message, .. } => *message = Some(text),
        }
        self
    }

    /// Short kind name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Required { .. } => "required",
            Rule::StringLength { .. } => "string-length",
            Rule::Pattern { .. } => "pattern",
            Rule::Email { .. } => "email",
            Rule::Range { .. } => "range",
            Rule::Custom { .. } => "custom",
        }
    }

    /// The message reported when this rule fails.
    pub fn message(&self) -> &str {
        let (custom, default) = match self {
            Rule::Required { message } => (message, "Required"),
            Rule::StringLength { message, .. } => (message, "The value length is out of range"),
            Rule::Pattern { message, .. } => (message, "Value does not match the pattern"),
            Rule::Email { message } => (message, "Email is invalid"),
            Rule::Range { message, .. } => (message, "Value is out of range"),
            Rule::Custom { message, .. } => (message, "Value is invalid"),
        };
        custom.as_deref().unwrap_or(default)
    }

    /// Evaluate this rule against the editor's committed raw value.
    pub(crate) fn evaluate(&self, editor: &Editor, raw: &str) -> Option<ValidationError> {
        let passed = match self {
            Rule::Required { .. } => !editor.is_empty_value(raw),
            Rule::StringLength { min, max, .. } => {
                let len = raw.chars().count();
                min.is_none_or(|min| len >= min) && max.is_none_or(|max| len <= max)
            }
            Rule::Pattern { pattern, .. } => pattern.is_match(raw),
            Rule::Email { .. } => raw.is_empty() || EmailAddress::is_valid(raw),
            Rule::Range { min, max, .. } => match raw.trim().parse::<f64>() {
                Ok(value) => {
                    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
                }
                // Unparseable text is the editor's problem, not the rule's.
                Err(_) => true,
            },
            Rule::Custom { check, .. } => check(raw),
        };

        if passed {
            None
        } else {
            Some(ValidationError::rule(self.message()))
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Pattern { pattern, .. } => f
                .debug_struct("Pattern")
                .field("pattern", &pattern.as_str())
                .finish(),
            Rule::Custom { .. } => f.debug_struct("Custom").finish_non_exhaustive(),
            other => f.write_str(other.kind()),
        }
    }
}
