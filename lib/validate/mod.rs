//! Declarative field validation with aggregated errors.

mod check;
mod result;


//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use check::{FieldCheck, is_valid_string};
pub use result::{ValidationError, ValidationErrors};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Evaluates every check in order and collects the failures.
///
/// All checks are evaluated, even after one fails, so callers see the full set of violations.
/// Returns `None` when every check passed.
pub fn validate<I>(checks: I) -> Option<ValidationErrors>
where
    I: IntoIterator<Item = FieldCheck>,
{
    let errors = checks
        .into_iter()
        .filter(|check| !check.condition)
        .map(ValidationError::from)
        .collect();

    ValidationErrors::from_vec(errors)
}
