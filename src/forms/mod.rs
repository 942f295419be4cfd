//! Form definitions backing the phonebook routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod contact;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}

impl FormError {
    /// First human readable message, suitable for a flash alert.
    pub fn message(&self) -> String {
        match self {
            FormError::Validation(errors) => first_message(errors),
        }
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Form validation failed".to_string())
}
