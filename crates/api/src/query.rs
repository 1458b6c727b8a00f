//! Shared request payload types for API handlers.
//!
//! Common form structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use gigboard_core::catalog::FormChoices;
use gigboard_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Form-encoded search submission (`search_term=...`).
///
/// A missing term is treated as empty, which matches every record.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Payload for the form-rendering GET endpoints.
///
/// `id` is set when editing an existing record.
#[derive(Debug, Serialize)]
pub struct FormPage<F: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub form: F,
    pub choices: FormChoices,
}

impl<F: Serialize> FormPage<F> {
    /// A blank create form.
    pub fn create(form: F) -> Self {
        Self {
            id: None,
            form,
            choices: FormChoices::new(),
        }
    }

    /// An edit form prefilled for record `id`.
    pub fn edit(id: DbId, form: F) -> Self {
        Self {
            id: Some(id),
            form,
            choices: FormChoices::new(),
        }
    }
}
