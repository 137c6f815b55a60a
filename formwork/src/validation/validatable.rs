//! Capability trait for editors that check their own input format.

use super::outcome::ValidationOutcome;

/// Type-specific format checking, implemented per editor variant.
///
/// The validator defers to this after all declared rules pass, re-deriving
/// the result from the committed raw value at call time so the outcome can
/// never lag behind the commit being validated.
pub trait SelfValidating {
    /// Check a committed raw value against this editor type's format.
    fn self_validity(&self, raw: &str) -> ValidationOutcome;

    /// Whether the raw value is this editor type's empty/null
    /// representation. [`Rule::Required`](super::Rule::Required) fails on
    /// exactly these values.
    fn is_empty_value(&self, raw: &str) -> bool {
        raw.trim().is_empty()
    }

    /// Canonicalize a committed raw value before it is stored.
    fn normalize(&self, raw: String) -> String {
        raw
    }
}
