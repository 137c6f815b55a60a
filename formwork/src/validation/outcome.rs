use serde::{Deserialize, Serialize};

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable message, from the failed rule or the editor's parser.
    pub message: String,
    /// True when the error came from the editor's own format check rather
    /// than from a declared rule.
    pub editor_specific: bool,
}

impl ValidationError {
    /// Error originating from a declared rule.
    pub fn rule(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            editor_specific: false,
        }
    }

    /// Error originating from the editor's own format check.
    pub fn editor(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            editor_specific: true,
        }
    }
}

/// The combined validity result for an editor/validator pair.
///
/// Exactly one outcome is authoritative for the pair at any time; the
/// validator publishes it to both its own state and the editor's observable
/// state in the same synchronous step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub error: Option<ValidationError>,
}

impl ValidationOutcome {
    /// Successful outcome.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// Failed outcome carrying the given error.
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }

    /// Failure attributed to a declared rule.
    pub fn rule_failure(message: impl Into<String>) -> Self {
        Self::invalid(ValidationError::rule(message))
    }

    /// Failure attributed to the editor's own format check.
    pub fn editor_failure(message: impl Into<String>) -> Self {
        Self::invalid(ValidationError::editor(message))
    }
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::valid()
    }
}
