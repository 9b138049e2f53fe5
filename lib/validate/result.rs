//! Validation error types.

use serde::Serialize;

use super::check::FieldCheck;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A failed field check, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: String,

    /// Human-readable explanation.
    #[serde(rename = "errmsg")]
    pub message: String,
}

/// Ordered, non-empty list of validation errors.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

#[allow(clippy::len_without_is_empty)]
impl ValidationErrors {
    /// Wrap `errors`, returning `None` if there are none.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Number of errors. Always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in the order their checks were supplied.
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    /// Names of the failing fields, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl From<FieldCheck> for ValidationError {
    fn from(check: FieldCheck) -> Self {
        Self {
            field: check.field,
            message: check.message,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
