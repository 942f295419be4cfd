use serde::{Deserialize, Serialize};

use crate::domain::types::ContactId;

/// A phonebook entry as mirrored from the remote API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
}

/// Payload sent to the API when creating an entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
}

impl NewContact {
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Partial update of an entry. Absent fields are left untouched server-side
/// and are not serialized.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactPatch {
    /// Builds a patch from raw form values, dropping blank fields.
    #[must_use]
    pub fn new(name: Option<String>, phone: Option<String>) -> Self {
        Self {
            name: name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

/// Entry shape returned after an update: only the fields that were sent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialContact {
    pub id: ContactId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
