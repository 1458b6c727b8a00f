//! Form validation helpers built on the `validator` crate.
//!
//! Form DTOs derive [`validator::Validate`] and reference the custom
//! checks below. [`validate_form`] runs the derived rules and flattens any
//! failures into a sorted list of [`FieldViolation`]s.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::catalog;
use crate::error::CoreError;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Run the derived rules on `form`, mapping failures to
/// [`CoreError::InvalidForm`].
pub fn validate_form<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate()
        .map_err(|errors| CoreError::InvalidForm(collect_violations(&errors)))
}

/// Flatten `validator` errors into one violation per failed rule,
/// ordered by field name so responses are deterministic.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Failed '{}' check.", err.code));
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/* --------------------------------------------------------------------------
   Custom rules (referenced from `#[validate(custom(...))]`)
   -------------------------------------------------------------------------- */

/// Reject empty or whitespace-only input.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "This field is required."));
    }
    Ok(())
}

/// Require a known state code.
pub fn state_code(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "This field is required."));
    }
    if !catalog::is_valid_state(value) {
        return Err(error("choice", "Not a valid choice."));
    }
    Ok(())
}

/// Require at least one genre, each from the catalog.
pub fn genre_list(values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(error("required", "This field is required."));
    }
    if values.iter().any(|g| !catalog::is_valid_genre(g)) {
        return Err(error("choice", "One or more genres are not valid choices."));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Normalisation
   -------------------------------------------------------------------------- */

/// Trim an optional text field, treating blank input as absent.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim every entry of a list and drop blanks and duplicates, keeping the
/// first occurrence order.
pub fn normalize_list(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        let v = v.trim().to_string();
        if !v.is_empty() && !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
