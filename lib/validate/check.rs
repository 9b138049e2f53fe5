//! Field checks fed into the validation engine.

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A named assertion over request input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    /// Field the check applies to. Must match the request parameter name.
    pub field: String,

    /// Outcome of the already-evaluated predicate.
    pub condition: bool,

    /// Message reported when `condition` is false.
    pub message: String,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl FieldCheck {
    /// Create a check from its parts.
    pub fn new(field: impl Into<String>, condition: bool, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            condition,
            message: message.into(),
        }
    }

    /// Check that `value` is not blank, reporting "<field> cannot be blank" otherwise.
    pub fn not_blank(field: &str, value: &str) -> Self {
        Self::new(
            field,
            is_valid_string(value),
            format!("{} cannot be blank", field),
        )
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Returns true if `s` has content once surrounding whitespace is trimmed.
pub fn is_valid_string(s: &str) -> bool {
    !s.trim().is_empty()
}
