use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::contact::{ContactPatch, NewContact};
use crate::domain::phone::validate_phone_string;
use crate::forms::FormError;

const REQUIRED_MESSAGE: &str = "Field is required";
const AT_LEAST_ONE_MESSAGE: &str = "At least one field should be present";

fn error_with(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Phone format check; blank values pass.
fn validate_phone(value: &str) -> Result<(), ValidationError> {
    validate_phone_string(Some(value)).map_err(|err| error_with("phone", err.to_string()))
}

/// Format errors win over the missing value error.
fn validate_required_phone(value: &str) -> Result<(), ValidationError> {
    validate_phone(value)?;
    if value.is_empty() {
        return Err(error_with("required", REQUIRED_MESSAGE));
    }
    Ok(())
}

/// Whitespace-only values count as absent.
fn validate_at_least_one(form: &EditContactForm) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() && form.phone.trim().is_empty() {
        return Err(error_with("at_least_one", AT_LEAST_ONE_MESSAGE));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for adding a phonebook entry.
pub struct CreateContactForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_required_phone"))]
    pub phone: String,
}

impl CreateContactForm {
    /// Validates the form and converts it into the create payload.
    pub fn into_new_contact(self) -> Result<NewContact, FormError> {
        self.validate()?;
        Ok(NewContact::new(self.name, self.phone))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_at_least_one"))]
/// Form data for editing an entry. Blank fields are left unchanged.
pub struct EditContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

impl EditContactForm {
    /// Validates the form and converts it into a partial update.
    pub fn into_patch(self) -> Result<ContactPatch, FormError> {
        self.validate()?;
        Ok(ContactPatch::new(Some(self.name), Some(self.phone)))
    }
}

#[derive(Debug, Default, Deserialize)]
/// Previous values of the entry being deleted, posted from hidden inputs.
pub struct DeleteContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl From<DeleteContactForm> for NewContact {
    fn from(form: DeleteContactForm) -> Self {
        NewContact::new(form.name, form.phone)
    }
}
